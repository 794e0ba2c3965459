//! Reading and updating name table records
use write_fonts::read::tables::name::MacRomanMapping;
use write_fonts::tables::name::{Name, NameRecord};
use write_fonts::types::NameId;

pub const COPYRIGHT: NameId = NameId::COPYRIGHT_NOTICE;
pub const FAMILY: NameId = NameId::FAMILY_NAME;
pub const SUBFAMILY: NameId = NameId::SUBFAMILY_NAME;
pub const UNIQUE_ID: NameId = NameId::UNIQUE_ID;
pub const FULL_NAME: NameId = NameId::FULL_NAME;
pub const POSTSCRIPT_NAME: NameId = NameId::POSTSCRIPT_NAME;
pub const TYPOGRAPHIC_FAMILY: NameId = NameId::TYPOGRAPHIC_FAMILY_NAME;
pub const COMPATIBLE_FULL_NAME: NameId = NameId::COMPATIBLE_FULL_NAME;

/// Windows, Unicode BMP, English (US)
const WINDOWS_ENGLISH: (u16, u16, u16) = (3, 1, 0x409);
/// Macintosh, Roman, English
const MAC_ENGLISH: (u16, u16, u16) = (1, 0, 0);

fn platform(record: &NameRecord) -> (u16, u16, u16) {
    (record.platform_id, record.encoding_id, record.language_id)
}

fn is_english(record: &NameRecord) -> bool {
    let p = platform(record);
    p == WINDOWS_ENGLISH || p == MAC_ENGLISH
}

/// Create a new name record for the Windows platform in Unicode encoding
pub fn windows_english(name_id: NameId, string: &str) -> NameRecord {
    let (platform_id, encoding_id, language_id) = WINDOWS_ENGLISH;
    NameRecord::new(
        platform_id,
        encoding_id,
        language_id,
        name_id,
        string.to_string().into(),
    )
}

/// The English string for a nameID, preferring the Windows record.
pub fn get(name: &Name, name_id: NameId) -> Option<String> {
    let find = |wanted: (u16, u16, u16)| {
        name.name_record
            .iter()
            .find(|r| r.name_id == name_id && platform(r) == wanted)
            .map(|r| r.string.as_str().to_string())
    };
    find(WINDOWS_ENGLISH).or_else(|| find(MAC_ENGLISH))
}

fn is_mac_roman(value: &str) -> bool {
    value.chars().all(|c| MacRomanMapping.encode(c).is_some())
}

/// Overwrite every English record for the nameID, adding a Windows one if
/// there was none.
///
/// A value Mac Roman cannot encode only goes into the Windows record; the
/// Mac English record for the nameID is dropped.
pub fn set(name: &mut Name, name_id: NameId, value: &str) {
    if !is_mac_roman(value) {
        let before = name.name_record.len();
        name.name_record
            .retain(|r| !(r.name_id == name_id && platform(r) == MAC_ENGLISH));
        if name.name_record.len() != before {
            log::warn!(
                "nameID {}: {:?} is not Mac Roman, dropping the Mac record",
                name_id.to_u16(),
                value
            );
        }
    }
    let mut has_windows = false;
    for record in name
        .name_record
        .iter_mut()
        .filter(|r| r.name_id == name_id && is_english(r))
    {
        if platform(record) == WINDOWS_ENGLISH {
            has_windows = true;
        }
        record.string = value.to_string().into();
    }
    if !has_windows {
        name.name_record.push(windows_english(name_id, value));
    }
    name.name_record.sort();
}

/// Drop the English records for the nameID.
pub fn clear(name: &mut Name, name_id: NameId) {
    name.name_record
        .retain(|r| !(r.name_id == name_id && is_english(r)));
}
