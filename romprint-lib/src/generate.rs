//! Dispatch from a console identifier to its hash recipe.

use romprint_core::{Console, HashError, emit_error, path, verbose_with};

use crate::digest::{hash_buffer, hash_whole_file, read_buffered};
use crate::playlist;
use crate::{arcade, atari, nec, nintendo, panasonic, sega, sony};

/// Generate a hash for an in-memory ROM image.
///
/// On failure the error is also reported through the error sink.
pub fn generate_from_buffer(console: Console, buffer: &[u8]) -> Result<String, HashError> {
    report_failure(buffer_recipe(console, buffer))
}

/// Generate a hash for a ROM, disc image, or playlist on disk.
///
/// On failure the error is also reported through the error sink.
pub fn generate_from_file(console: Console, path: &str) -> Result<String, HashError> {
    report_failure(file_recipe(console, path))
}

fn report_failure(result: Result<String, HashError>) -> Result<String, HashError> {
    if let Err(error) = &result {
        log::debug!("hash generation failed: {error}");
        emit_error(&error.to_string());
    }
    result
}

fn buffer_recipe(console: Console, buffer: &[u8]) -> Result<String, HashError> {
    use Console::*;

    match console {
        // straight whole-buffer hash
        AppleII | Atari2600 | AtariJaguar | ColecoVision | GameBoy | GameBoyAdvance
        | GameBoyColor | GameGear | Intellivision | MagnavoxOdyssey2 | MasterSystem | MegaDrive
        | Msx | NeoGeoPocket | Nintendo64 | Oric | Pc8800 | PokemonMini | Sega32x | Sg1000
        | Supervision | Tic80 | Vectrex | VirtualBoy | WonderSwan => Ok(hash_buffer(buffer)),

        // header-stripping recipes
        Atari7800 => Ok(atari::atari_7800(buffer)),
        AtariLynx => Ok(atari::lynx(buffer)),
        Nes => Ok(nintendo::nes(buffer)),
        PcEngine => Ok(nec::pce(buffer)),
        Snes => Ok(nintendo::snes(buffer)),

        other => Err(HashError::UnsupportedConsole {
            console: other.display_name(),
            operation: "buffer",
        }),
    }
}

fn file_recipe(console: Console, path: &str) -> Result<String, HashError> {
    use Console::*;

    match console {
        // generic whole-file hash - don't buffer
        AppleII | Atari2600 | AtariJaguar | ColecoVision | GameBoy | GameBoyAdvance
        | GameBoyColor | GameGear | Intellivision | MagnavoxOdyssey2 | MasterSystem | MegaDrive
        | NeoGeoPocket | Nintendo64 | Oric | PokemonMini | Sega32x | Sg1000 | Supervision
        | Tic80 | Vectrex | VirtualBoy | WonderSwan => hash_whole_file(path),

        // generic whole-file hash with playlist support
        Msx | Pc8800 => {
            if path::compare_extension(path, "m3u") {
                return playlist_recipe(console, path);
            }
            hash_whole_file(path)
        }

        // header inspection needs the content in memory
        Atari7800 | AtariLynx | Nes | Snes => {
            let buffer = read_buffered(path)?;
            buffer_recipe(console, &buffer)
        }

        Arcade => Ok(arcade::arcade(path)),
        NintendoDs => nintendo::nintendo_ds(path),

        PcEngine => {
            if path::compare_extension(path, "cue")
                || path::compare_extension(path, "chd")
            {
                return nec::pce_cd(path);
            }
            if path::compare_extension(path, "m3u") {
                return playlist_recipe(console, path);
            }
            let buffer = read_buffered(path)?;
            buffer_recipe(console, &buffer)
        }

        ThreeDo => disc_recipe(console, path, panasonic::threedo),
        PcFx => disc_recipe(console, path, nec::pcfx_cd),
        PlayStation => disc_recipe(console, path, sony::playstation),
        PlayStation2 => disc_recipe(console, path, sony::playstation2),
        Dreamcast => disc_recipe(console, path, sega::dreamcast),
        SegaCd | Saturn => disc_recipe(console, path, sega::sega_cd),

        other => Err(HashError::UnsupportedConsole {
            console: other.display_name(),
            operation: "file",
        }),
    }
}

/// CD consoles all accept an `.m3u` playlist in place of the disc.
fn disc_recipe(
    console: Console,
    path: &str,
    recipe: fn(&str) -> Result<String, HashError>,
) -> Result<String, HashError> {
    if path::compare_extension(path, "m3u") {
        return playlist_recipe(console, path);
    }
    recipe(path)
}

fn playlist_recipe(console: Console, playlist_path: &str) -> Result<String, HashError> {
    verbose_with(|| format!("Processing playlist: {}", path::filename(playlist_path)));

    let disc_path = playlist::first_item(playlist_path)?;
    file_recipe(console, &disc_path)
}

#[cfg(test)]
#[path = "tests/generate_tests.rs"]
mod tests;
