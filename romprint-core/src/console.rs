use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Console identifiers for every system with a hashing recipe.
///
/// This enum centralizes console identity — short names, display names,
/// manufacturer — in one place. The variant itself is the identifier
/// shared with callers; there is no separate numeric taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Console {
    // Nintendo
    Nes,
    Snes,
    Nintendo64,
    GameBoy,
    GameBoyColor,
    GameBoyAdvance,
    NintendoDs,
    PokemonMini,
    VirtualBoy,

    // Sega
    Sg1000,
    MasterSystem,
    GameGear,
    MegaDrive,
    Sega32x,
    SegaCd,
    Saturn,
    Dreamcast,

    // Sony
    PlayStation,
    PlayStation2,

    // NEC
    PcEngine,
    PcFx,
    Pc8800,

    // Atari
    Atari2600,
    Atari7800,
    AtariJaguar,
    AtariLynx,

    // Others
    AppleII,
    Arcade,
    ColecoVision,
    Intellivision,
    MagnavoxOdyssey2,
    Msx,
    NeoGeoPocket,
    Oric,
    SharpX1,
    Supervision,
    ThomsonTo8,
    ThreeDo,
    Tic80,
    Vectrex,
    WonderSwan,
}

/// All console variants in registration order.
pub const ALL_CONSOLES: &[Console] = &[
    Console::Nes,
    Console::Snes,
    Console::Nintendo64,
    Console::GameBoy,
    Console::GameBoyColor,
    Console::GameBoyAdvance,
    Console::NintendoDs,
    Console::PokemonMini,
    Console::VirtualBoy,
    Console::Sg1000,
    Console::MasterSystem,
    Console::GameGear,
    Console::MegaDrive,
    Console::Sega32x,
    Console::SegaCd,
    Console::Saturn,
    Console::Dreamcast,
    Console::PlayStation,
    Console::PlayStation2,
    Console::PcEngine,
    Console::PcFx,
    Console::Pc8800,
    Console::Atari2600,
    Console::Atari7800,
    Console::AtariJaguar,
    Console::AtariLynx,
    Console::AppleII,
    Console::Arcade,
    Console::ColecoVision,
    Console::Intellivision,
    Console::MagnavoxOdyssey2,
    Console::Msx,
    Console::NeoGeoPocket,
    Console::Oric,
    Console::SharpX1,
    Console::Supervision,
    Console::ThomsonTo8,
    Console::ThreeDo,
    Console::Tic80,
    Console::Vectrex,
    Console::WonderSwan,
];

impl Console {
    /// Canonical short name used for CLI arguments and identifiers.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Nes => "nes",
            Self::Snes => "snes",
            Self::Nintendo64 => "n64",
            Self::GameBoy => "gb",
            Self::GameBoyColor => "gbc",
            Self::GameBoyAdvance => "gba",
            Self::NintendoDs => "nds",
            Self::PokemonMini => "mini",
            Self::VirtualBoy => "vb",
            Self::Sg1000 => "sg1000",
            Self::MasterSystem => "sms",
            Self::GameGear => "gamegear",
            Self::MegaDrive => "megadrive",
            Self::Sega32x => "32x",
            Self::SegaCd => "segacd",
            Self::Saturn => "saturn",
            Self::Dreamcast => "dreamcast",
            Self::PlayStation => "psx",
            Self::PlayStation2 => "ps2",
            Self::PcEngine => "pce",
            Self::PcFx => "pcfx",
            Self::Pc8800 => "pc88",
            Self::Atari2600 => "2600",
            Self::Atari7800 => "7800",
            Self::AtariJaguar => "jaguar",
            Self::AtariLynx => "lynx",
            Self::AppleII => "apple2",
            Self::Arcade => "arcade",
            Self::ColecoVision => "coleco",
            Self::Intellivision => "intellivision",
            Self::MagnavoxOdyssey2 => "odyssey2",
            Self::Msx => "msx",
            Self::NeoGeoPocket => "ngp",
            Self::Oric => "oric",
            Self::SharpX1 => "x1",
            Self::Supervision => "supervision",
            Self::ThomsonTo8 => "to8",
            Self::ThreeDo => "3do",
            Self::Tic80 => "tic80",
            Self::Vectrex => "vectrex",
            Self::WonderSwan => "wonderswan",
        }
    }

    /// Full display name for the console.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Nes => "Nintendo Entertainment System",
            Self::Snes => "Super Nintendo Entertainment System",
            Self::Nintendo64 => "Nintendo 64",
            Self::GameBoy => "Game Boy",
            Self::GameBoyColor => "Game Boy Color",
            Self::GameBoyAdvance => "Game Boy Advance",
            Self::NintendoDs => "Nintendo DS",
            Self::PokemonMini => "Pokemon Mini",
            Self::VirtualBoy => "Virtual Boy",
            Self::Sg1000 => "Sega SG-1000",
            Self::MasterSystem => "Sega Master System",
            Self::GameGear => "Sega Game Gear",
            Self::MegaDrive => "Sega Mega Drive / Genesis",
            Self::Sega32x => "Sega 32X",
            Self::SegaCd => "Sega CD / Mega CD",
            Self::Saturn => "Sega Saturn",
            Self::Dreamcast => "Sega Dreamcast",
            Self::PlayStation => "Sony PlayStation",
            Self::PlayStation2 => "Sony PlayStation 2",
            Self::PcEngine => "PC Engine / TurboGrafx-16",
            Self::PcFx => "PC-FX",
            Self::Pc8800 => "NEC PC-8800",
            Self::Atari2600 => "Atari 2600",
            Self::Atari7800 => "Atari 7800",
            Self::AtariJaguar => "Atari Jaguar",
            Self::AtariLynx => "Atari Lynx",
            Self::AppleII => "Apple II",
            Self::Arcade => "Arcade",
            Self::ColecoVision => "ColecoVision",
            Self::Intellivision => "Intellivision",
            Self::MagnavoxOdyssey2 => "Magnavox Odyssey 2",
            Self::Msx => "MSX",
            Self::NeoGeoPocket => "NeoGeo Pocket",
            Self::Oric => "Oric",
            Self::SharpX1 => "Sharp X1",
            Self::Supervision => "Watara Supervision",
            Self::ThomsonTo8 => "Thomson TO8",
            Self::ThreeDo => "3DO",
            Self::Tic80 => "TIC-80",
            Self::Vectrex => "Vectrex",
            Self::WonderSwan => "WonderSwan",
        }
    }

    /// Alternative names accepted when parsing (checked case-insensitively).
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Nes => &["famicom", "fds"],
            Self::Snes => &["sfc", "superfamicom"],
            Self::MegaDrive => &["genesis", "md"],
            Self::PcEngine => &["tg16", "turbografx", "sgx"],
            Self::PlayStation => &["ps1", "playstation"],
            Self::GameGear => &["gg"],
            Self::NintendoDs => &["ds"],
            Self::ThreeDo => &["opera"],
            _ => &[],
        }
    }

    /// All console variants in registration order.
    pub fn all() -> &'static [Console] {
        ALL_CONSOLES
    }
}

impl fmt::Display for Console {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Error returned when a console name cannot be parsed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown console: {0}")]
pub struct ConsoleParseError(pub String);

impl FromStr for Console {
    type Err = ConsoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        for &console in ALL_CONSOLES {
            if console.short_name() == lower {
                return Ok(console);
            }
            if console.aliases().iter().any(|a| *a == lower) {
                return Ok(console);
            }
        }
        Err(ConsoleParseError(s.to_string()))
    }
}

#[cfg(test)]
#[path = "tests/console_tests.rs"]
mod tests;
