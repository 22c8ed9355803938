//! Static key geometry shared by the packer and the image sampler.
//!
//! A layout links every key with an LED to its nibble offset inside the packed
//! color buffers, and every drawable key to a 3x3 pixel window on a small
//! canvas that images are resampled onto.

use std::collections::HashSet;

use crate::{KeyId, KeyboardError, Result};

/// Width and height of the pixel block averaged for each key
pub const WINDOW_SIZE: u32 = 3;

/// A key with an LED
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyDef {
    pub name: &'static str,
    pub id: KeyId,
    /// Nibble offset in the packed buffer. Even offsets are high nibbles.
    pub offset: u8,
}

/// Geometry of one sampled key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyGeometryEntry {
    pub key: KeyId,
    pub offset: u8,
    pub column: u32,
    pub row: u32,
}

/// Key geometry table for one keyboard model
#[derive(Debug)]
pub struct Layout {
    pub name: &'static str,
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Bytes per packed color channel, each holding two keys
    pub slots: usize,
    /// Every key with an LED
    pub keys: &'static [KeyDef],
    /// Drawable keys, row by row
    pub key_rows: &'static [&'static [KeyId]],
    /// Window column start for each key in `key_rows`
    pub pixel_columns: &'static [&'static [u32]],
    /// Window row start for each row in `key_rows`
    pub pixel_rows: &'static [u32],
    /// Status keys that are always lit white when drawing images
    pub indicators: &'static [KeyId],
}

impl Layout {
    pub fn key(&self, id: KeyId) -> Option<&'static KeyDef> {
        self.keys.iter().find(|k| k.id == id)
    }

    /// Nibble offset of a key in the packed buffer
    pub fn offset_of(&self, id: KeyId) -> Result<u8> {
        self.key(id)
            .map(|k| k.offset)
            .ok_or(KeyboardError::UnknownKey(id))
    }

    /// Byte slot of a key in each packed channel
    pub fn slot_of(&self, id: KeyId) -> Result<usize> {
        Ok(self.offset_of(id)? as usize / 2)
    }

    /// Top left corner (column, row) of a key's sampling window
    pub fn sampling_window(&self, id: KeyId) -> Result<(u32, u32)> {
        self.key_rows
            .iter()
            .zip(self.pixel_columns)
            .zip(self.pixel_rows)
            .find_map(|((keys, columns), &row)| {
                keys.iter()
                    .position(|&k| k == id)
                    .map(|i| (columns[i], row))
            })
            .ok_or(KeyboardError::UnknownKey(id))
    }

    /// All sampled keys with their offsets and windows
    pub fn entries(&self) -> impl Iterator<Item = KeyGeometryEntry> + '_ {
        self.key_rows
            .iter()
            .zip(self.pixel_columns)
            .zip(self.pixel_rows)
            .flat_map(move |((keys, columns), &row)| {
                keys.iter().zip(columns.iter()).filter_map(move |(&key, &column)| {
                    let offset = self.key(key)?.offset;
                    Some(KeyGeometryEntry {
                        key,
                        offset,
                        column,
                        row,
                    })
                })
            })
    }

    /// Find a key by name, ignoring case
    pub fn key_by_name(&self, name: &str) -> Option<KeyId> {
        self.keys
            .iter()
            .find(|k| k.name.eq_ignore_ascii_case(name))
            .map(|k| k.id)
    }

    pub fn name_of(&self, id: KeyId) -> Option<&'static str> {
        self.key(id).map(|k| k.name)
    }

    /// Check the structural integrity of the tables
    pub fn validate(&self) -> Result<()> {
        if self.key_rows.len() != self.pixel_columns.len()
            || self.key_rows.len() != self.pixel_rows.len()
        {
            return Err(KeyboardError::InvalidLayout(
                "key rows and pixel rows differ in count",
            ));
        }
        if self
            .key_rows
            .iter()
            .zip(self.pixel_columns)
            .any(|(keys, columns)| keys.len() != columns.len())
        {
            return Err(KeyboardError::InvalidLayout(
                "key row and pixel row differ in length",
            ));
        }

        let mut ids = HashSet::new();
        let mut offsets = vec![false; self.slots * 2];
        for key in self.keys {
            if !ids.insert(key.id) {
                return Err(KeyboardError::InvalidLayout("duplicate key id"));
            }
            let taken = offsets
                .get_mut(key.offset as usize)
                .ok_or(KeyboardError::InvalidLayout("key offset out of range"))?;
            if *taken {
                return Err(KeyboardError::InvalidLayout("duplicate key offset"));
            }
            *taken = true;
        }

        if self
            .key_rows
            .iter()
            .flat_map(|row| row.iter())
            .chain(self.indicators)
            .any(|id| !ids.contains(id))
        {
            return Err(KeyboardError::InvalidLayout("undefined key referenced"));
        }

        for (&row, columns) in self.pixel_rows.iter().zip(self.pixel_columns) {
            if row + WINDOW_SIZE > self.height
                || columns.iter().any(|&c| c + WINDOW_SIZE > self.width)
            {
                return Err(KeyboardError::InvalidLayout(
                    "sampling window outside of canvas",
                ));
            }
        }

        Ok(())
    }
}
