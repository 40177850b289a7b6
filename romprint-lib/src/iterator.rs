//! Candidate iteration for ambiguous container formats.
//!
//! A `.cue` or `.bin` names a disc, not a console. The iterator infers an
//! ordered candidate list from the path's extension (and, for `.bin` and
//! `.dsk`, the file size), then tries one recipe per [`next`] call until
//! one produces a hash.
//!
//! [`next`]: Iterator::next

use std::io::SeekFrom;

use romprint_core::{Console, open_file, path, verbose_with};

use crate::generate::{generate_from_buffer, generate_from_file};
use crate::playlist;

/// `.bin` files larger than this are assumed to be CD tracks rather than
/// cartridge dumps.
const BIN_CD_THRESHOLD: u64 = 32 * 1024 * 1024;

/// Tries the hash recipes of every console a path could belong to, in
/// priority order.
///
/// The candidate order is a pure function of the path's extension and,
/// for `.bin`/`.dsk`, the file size. When a buffer is supplied, it is
/// hashed in place of the file contents (path-only recipes then fail
/// over to the next candidate).
pub struct HashIterator<'a> {
    path: String,
    buffer: Option<&'a [u8]>,
    consoles: Vec<Console>,
    index: usize,
}

impl<'a> HashIterator<'a> {
    /// Build the candidate list for a path, optionally with the file's
    /// contents already in memory.
    pub fn new(path: &str, buffer: Option<&'a [u8]>) -> Self {
        let mut iterator = HashIterator {
            path: path.to_string(),
            buffer,
            consoles: Vec::new(),
            index: 0,
        };

        loop {
            let ext = path::extension(&iterator.path).to_ascii_lowercase();
            match ext.as_str() {
                "a78" => iterator.push(Console::Atari7800),
                "bin" => iterator.init_bin(),
                "bs" | "fig" | "sfc" | "smc" | "swc" => iterator.push(Console::Snes),
                "cas" | "mx1" | "mx2" | "ri" => iterator.push(Console::Msx),
                "chd" => {
                    iterator.push(Console::PlayStation);
                    iterator.push(Console::PlayStation2);
                    iterator.push(Console::Dreamcast);
                    iterator.push(Console::PcEngine);
                    iterator.push(Console::ThreeDo);
                    iterator.push(Console::PcFx);
                    // handles both Sega CD and Saturn
                    iterator.push(Console::SegaCd);
                }
                "col" => iterator.push(Console::ColecoVision),
                "cue" => {
                    iterator.push(Console::PlayStation);
                    iterator.push(Console::PlayStation2);
                    iterator.push(Console::PcEngine);
                    iterator.push(Console::ThreeDo);
                    iterator.push(Console::PcFx);
                    // handles both Sega CD and Saturn
                    iterator.push(Console::SegaCd);
                }
                "d88" => {
                    iterator.push(Console::Pc8800);
                    iterator.push(Console::SharpX1);
                }
                "2d" => iterator.push(Console::SharpX1),
                "dsk" => iterator.init_dsk(),
                "fd" | "k7" | "m5" | "m7" | "sap" => iterator.push(Console::ThomsonTo8),
                "fds" | "nes" => iterator.push(Console::Nes),
                "gb" => iterator.push(Console::GameBoy),
                "gba" => iterator.push(Console::GameBoyAdvance),
                "gbc" => iterator.push(Console::GameBoyColor),
                "gdi" => iterator.push(Console::Dreamcast),
                "gg" => iterator.push(Console::GameGear),
                "iso" => {
                    iterator.push(Console::PlayStation2);
                    iterator.push(Console::ThreeDo);
                    // handles both Sega CD and Saturn
                    iterator.push(Console::SegaCd);
                }
                "jag" => iterator.push(Console::AtariJaguar),
                "lnx" => iterator.push(Console::AtariLynx),
                "m3u" => {
                    let Ok(disc_path) = playlist::first_item(&iterator.path) else {
                        // no disc to hash; the iterator yields nothing
                        return iterator;
                    };

                    // any supplied buffer holds the playlist, not the disc
                    iterator.buffer = None;
                    iterator.path = disc_path;
                    continue;
                }
                "md" => iterator.push(Console::MegaDrive),
                "min" => iterator.push(Console::PokemonMini),
                "n64" | "ndd" => iterator.push(Console::Nintendo64),
                "nds" => iterator.push(Console::NintendoDs),
                "ngc" => iterator.push(Console::NeoGeoPocket),
                "pce" | "sgx" => iterator.push(Console::PcEngine),
                "rom" => {
                    iterator.push(Console::Msx);
                    iterator.push(Console::ThomsonTo8);
                }
                "sg" => iterator.push(Console::Sg1000),
                "sv" => iterator.push(Console::Supervision),
                "tap" => iterator.push(Console::Oric),
                "tic" => iterator.push(Console::Tic80),
                "vb" => iterator.push(Console::VirtualBoy),
                "wsc" => iterator.push(Console::WonderSwan),
                "woz" => iterator.push(Console::AppleII),
                // archives are never decompressed; arcade hashes the name
                "7z" | "zip" => iterator.push(Console::Arcade),
                _ => {}
            }

            verbose_with(|| {
                format!(
                    "Found {} potential consoles for {ext} file extension",
                    iterator.consoles.len()
                )
            });

            break;
        }

        // an unmatched extension still gets a whole-file hash
        if iterator.consoles.is_empty() {
            iterator.consoles.push(Console::GameBoy);
        }

        iterator
    }

    /// The remaining candidate consoles, in the order they will be tried.
    pub fn candidates(&self) -> &[Console] {
        &self.consoles[self.index..]
    }

    /// The console whose recipe ran last, once iteration has started.
    /// After a successful [`next`](Iterator::next), this is the console
    /// that produced the hash.
    pub fn last_console(&self) -> Option<Console> {
        self.consoles.get(self.index.checked_sub(1)?).copied()
    }

    /// Append a candidate, keeping each console at most once in
    /// first-insertion order.
    fn push(&mut self, console: Console) {
        if !self.consoles.contains(&console) {
            self.consoles.push(console);
        }
    }

    /// A raw `.bin` may be a CD track: anything over 32 MiB gets the CD
    /// candidates before the cartridge fallback. Smaller files hash as
    /// Mega Drive, which shares its recipe with the other `.bin`
    /// cartridge systems.
    fn init_bin(&mut self) {
        if self.buffer.is_none()
            && let Some(size) = self.stat_file()
            && size > BIN_CD_THRESHOLD
        {
            self.push(Console::ThreeDo);
            self.push(Console::PlayStation);
            self.push(Console::PlayStation2);
            self.push(Console::SegaCd);
            self.push(Console::MegaDrive);
            return;
        }

        self.push(Console::MegaDrive);
    }

    /// `.dsk` floppy geometry decides between MSX and Apple II; whichever
    /// matches goes first and the other stays as a fallback.
    fn init_dsk(&mut self) {
        let size = match self.buffer {
            Some(buffer) if !buffer.is_empty() => buffer.len() as u64,
            _ => self.stat_file().unwrap_or(0),
        };

        match size {
            // FAT-12: 512-byte sectors, 9 per track, 80 tracks (x2 sides)
            s if s == 512 * 9 * 80 || s == 512 * 9 * 80 * 2 || s == 512 * 9 * 40 => {
                self.push(Console::Msx);
            }
            // Apple II: 256-byte sectors, 16 (new) or 13 (old) per track
            s if s == 256 * 16 * 35 || s == 256 * 13 * 35 => {
                self.push(Console::AppleII);
            }
            _ => {}
        }

        self.push(Console::Msx);
        self.push(Console::AppleII);
    }

    fn stat_file(&self) -> Option<u64> {
        let mut file = open_file(&self.path).ok()?;
        file.seek(SeekFrom::End(0)).ok()
    }
}

impl Iterator for HashIterator<'_> {
    type Item = String;

    /// Try candidates until one recipe succeeds; `None` once exhausted.
    fn next(&mut self) -> Option<String> {
        while let Some(&console) = self.consoles.get(self.index) {
            self.index += 1;

            verbose_with(|| format!("Trying console {console}"));

            let result = match self.buffer {
                Some(buffer) => generate_from_buffer(console, buffer),
                None => generate_from_file(console, &self.path),
            };

            if let Ok(hash) = result {
                return Some(hash);
            }
        }

        None
    }
}

#[cfg(test)]
#[path = "tests/iterator_tests.rs"]
mod tests;
