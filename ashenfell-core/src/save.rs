//! Binary save files: the hero roster plus per-level completion flags.
//!
//! Layout (host-native endianness, unversioned):
//!
//! ```text
//! hero_count: i32
//! per hero:
//!     tag_len: i32, tag: bytes        ("Warrior" | "Archer" | "Mage")
//!     name_len: i32, name: bytes
//!     health: i32, mana: i32, strength: i32, shield: i32
//! level_count: i32
//! per level:
//!     won: u8                         (0 | 1)
//! ```
//!
//! Loading only overlays state onto a live session: heroes are
//! reconstructed from their class tag, and the completion flags are
//! applied to the already-constructed level list, which must match the
//! persisted count exactly.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;

use crate::character::Character;
use crate::class::{ClassKind, StatBlock};
use crate::encounter::Encounter;
use crate::roster::{Roster, MAX_HEROES};

/// Longest string the loader accepts, far above any real name.
const MAX_STR_LEN: i32 = 4096;

/// Errors from save/load operations.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("save io: {0}")]
    Io(#[from] io::Error),

    #[error("corrupt save data: {0}")]
    CorruptSaveData(String),
}

/// Everything a save file holds, validated and ready to apply.
#[derive(Debug)]
pub struct SavedState {
    pub heroes: Vec<Character>,
    pub completed: Vec<bool>,
}

/// Write the roster and level completion flags to `path`.
pub fn save_game(
    path: impl AsRef<Path>,
    roster: &Roster,
    levels: &[Encounter],
) -> Result<(), SaveError> {
    let path = path.as_ref();
    let mut out = BufWriter::new(File::create(path)?);

    write_i32(&mut out, roster.len() as i32)?;
    for (_, hero) in roster.iter() {
        write_str(&mut out, &hero.class().to_string())?;
        write_str(&mut out, hero.name())?;
        let stats = hero.stats();
        for value in [stats.health, stats.mana, stats.strength, stats.shield] {
            write_i32(&mut out, value)?;
        }
    }

    write_i32(&mut out, levels.len() as i32)?;
    for level in levels {
        out.write_all(&[level.has_won() as u8])?;
    }
    out.flush()?;

    tracing::debug!(path = %path.display(), heroes = roster.len(), "wrote save file");
    Ok(())
}

/// Read a save file.
///
/// Returns `Ok(None)` when there is no file at `path` (no saved state is
/// not an error). `live_levels` is the length of the session's level
/// list; a persisted count that disagrees with it is corrupt, since the
/// flags can only be overlaid onto that exact list.
pub fn load_game(
    path: impl AsRef<Path>,
    live_levels: usize,
) -> Result<Option<SavedState>, SaveError> {
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let mut input = BufReader::new(file);

    let hero_count = read_i32(&mut input)?;
    if hero_count < 0 || hero_count as usize > MAX_HEROES {
        return Err(SaveError::CorruptSaveData(format!(
            "hero count {hero_count} out of range"
        )));
    }

    let mut heroes = Vec::with_capacity(hero_count as usize);
    for _ in 0..hero_count {
        let tag = read_str(&mut input)?;
        let class = ClassKind::from_str(&tag).map_err(|_| {
            SaveError::CorruptSaveData(format!("unknown class tag `{tag}`"))
        })?;
        if !class.is_playable() {
            return Err(SaveError::CorruptSaveData(format!(
                "class `{tag}` cannot appear in a roster"
            )));
        }

        let name = read_str(&mut input)?;
        let stats = StatBlock {
            health: read_i32(&mut input)?,
            mana: read_i32(&mut input)?,
            strength: read_i32(&mut input)?,
            shield: read_i32(&mut input)?,
        };
        heroes.push(Character::with_stats(class, name, stats));
    }

    let level_count = read_i32(&mut input)?;
    if level_count < 0 || level_count as usize != live_levels {
        return Err(SaveError::CorruptSaveData(format!(
            "save has {level_count} levels, game has {live_levels}"
        )));
    }

    let mut completed = Vec::with_capacity(live_levels);
    for _ in 0..level_count {
        let mut byte = [0u8; 1];
        read_exact(&mut input, &mut byte)?;
        completed.push(match byte[0] {
            0 => false,
            1 => true,
            other => {
                return Err(SaveError::CorruptSaveData(format!(
                    "invalid completion byte {other}"
                )))
            }
        });
    }

    tracing::debug!(path = %path.display(), heroes = heroes.len(), "read save file");
    Ok(Some(SavedState { heroes, completed }))
}

fn write_i32(out: &mut impl Write, value: i32) -> io::Result<()> {
    out.write_all(&value.to_ne_bytes())
}

fn write_str(out: &mut impl Write, s: &str) -> io::Result<()> {
    write_i32(out, s.len() as i32)?;
    out.write_all(s.as_bytes())
}

/// `read_exact` with truncation reported as corruption rather than io.
fn read_exact(input: &mut impl Read, buf: &mut [u8]) -> Result<(), SaveError> {
    input.read_exact(buf).map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => {
            SaveError::CorruptSaveData("unexpected end of file".to_string())
        }
        _ => SaveError::Io(e),
    })
}

fn read_i32(input: &mut impl Read) -> Result<i32, SaveError> {
    let mut buf = [0u8; 4];
    read_exact(input, &mut buf)?;
    Ok(i32::from_ne_bytes(buf))
}

fn read_str(input: &mut impl Read) -> Result<String, SaveError> {
    let len = read_i32(input)?;
    if !(0..=MAX_STR_LEN).contains(&len) {
        return Err(SaveError::CorruptSaveData(format!(
            "string length {len} out of range"
        )));
    }
    let mut buf = vec![0u8; len as usize];
    read_exact(input, &mut buf)?;
    String::from_utf8(buf)
        .map_err(|_| SaveError::CorruptSaveData("string is not valid UTF-8".to_string()))
}
