use crate::error::{Result, TouchupError};
use crate::names;
use std::fs;
use std::path::Path;
use write_fonts::from_obj::ToOwnedTable;
use write_fonts::read::{FontRef, TableProvider};
use write_fonts::tables::head::Head;
use write_fonts::tables::name::Name;
use write_fonts::tables::os2::Os2;
use write_fonts::types::NameId;
use write_fonts::FontBuilder;

/// A font being touched up.
///
/// The tables we edit are held as owned, mutable objects; everything else is
/// copied through from the source data untouched when the font is written.
#[derive(Debug, Clone)]
pub struct TouchupFont {
    data: Vec<u8>,
    pub head: Head,
    pub os2: Os2,
    pub name: Name,
}

impl TouchupFont {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|source| TouchupError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Read {} bytes from {}", data.len(), path.display());
        Self::from_bytes(data)
    }

    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let font = FontRef::new(&data)?;
        let head: Head = font.head()?.to_owned_table();
        let os2: Os2 = font.os2()?.to_owned_table();
        let name: Name = font.name()?.to_owned_table();
        Ok(TouchupFont {
            data,
            head,
            os2,
            name,
        })
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let data = self.to_bytes()?;
        fs::write(path, &data).map_err(|source| TouchupError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Wrote {}", path.display());
        Ok(())
    }

    /// Compile the edited tables and reassemble the font.
    ///
    /// `FontBuilder::build` fills in head.checksumAdjustment; the value
    /// carried over from the source font is zeroed so it does not take part
    /// in the sum.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let source = FontRef::new(&self.data)?;
        let mut head = self.head.clone();
        head.checksum_adjustment = 0;

        let mut builder = FontBuilder::new();
        builder.add_table(&head)?;
        builder.add_table(&self.os2)?;
        builder.add_table(&self.name)?;
        builder.copy_missing_tables(source);
        Ok(builder.build())
    }

    /// The English string for a nameID.
    pub fn name_string(&self, name_id: NameId) -> Option<String> {
        names::get(&self.name, name_id)
    }

    /// Like [`TouchupFont::name_string`], but a missing record is an error.
    pub fn required_name(&self, name_id: NameId) -> Result<String> {
        self.name_string(name_id)
            .ok_or(TouchupError::MissingName {
                name_id: name_id.to_u16(),
            })
    }

    pub fn set_name(&mut self, name_id: NameId, value: &str) {
        log::debug!("nameID {}: {:?}", name_id.to_u16(), value);
        names::set(&mut self.name, name_id, value)
    }

    pub fn clear_name(&mut self, name_id: NameId) {
        log::debug!("nameID {}: removed", name_id.to_u16());
        names::clear(&mut self.name, name_id)
    }
}
