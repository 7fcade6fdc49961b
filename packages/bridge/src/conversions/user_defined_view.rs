//! User-defined attribute views. Names and byte payloads are the same in
//! both hierarchies and pass through as they are.

use bytes::BytesMut;
use fsattr_native as native;
use fsattr_shadow as shadow;

use crate::exceptions::{decode_checked, encode_checked};
use crate::wrapper::{wrapper_conversion, Decoded, Encoded};

impl<D: native::UserDefinedFileAttributeView + ?Sized> shadow::UserDefinedFileAttributeView
    for Encoded<D>
{
    fn list(&self) -> shadow::Result<Vec<String>> {
        self.delegate().list().map_err(encode_checked)
    }

    fn size(&self, name: &str) -> shadow::Result<usize> {
        self.delegate().size(name).map_err(encode_checked)
    }

    fn read(&self, name: &str, dst: &mut BytesMut) -> shadow::Result<usize> {
        self.delegate().read(name, dst).map_err(encode_checked)
    }

    fn write(&self, name: &str, src: &[u8]) -> shadow::Result<usize> {
        self.delegate().write(name, src).map_err(encode_checked)
    }

    fn delete(&self, name: &str) -> shadow::Result<()> {
        self.delegate().delete(name).map_err(encode_checked)
    }
}

impl<D: shadow::UserDefinedFileAttributeView + ?Sized> native::UserDefinedFileAttributeView
    for Decoded<D>
{
    fn list(&self) -> native::Result<Vec<String>> {
        self.delegate().list().map_err(decode_checked)
    }

    fn size(&self, name: &str) -> native::Result<usize> {
        self.delegate().size(name).map_err(decode_checked)
    }

    fn read(&self, name: &str, dst: &mut BytesMut) -> native::Result<usize> {
        self.delegate().read(name, dst).map_err(decode_checked)
    }

    fn write(&self, name: &str, src: &[u8]) -> native::Result<usize> {
        self.delegate().write(name, src).map_err(decode_checked)
    }

    fn delete(&self, name: &str) -> native::Result<()> {
        self.delegate().delete(name).map_err(decode_checked)
    }
}

wrapper_conversion!(UserDefinedFileAttributeViewConversion => UserDefinedFileAttributeView);
