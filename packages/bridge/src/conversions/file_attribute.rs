use fsattr_native as native;
use fsattr_shadow as shadow;

use super::value::AttributeValueConversion;
use crate::conversion::Conversion;
use crate::wrapper::{wrapper_conversion, Decoded, Encoded};

impl<D: native::FileAttribute + ?Sized> shadow::FileAttribute for Encoded<D> {
    fn name(&self) -> String {
        self.delegate().name()
    }

    fn value(&self) -> shadow::AttributeValue {
        AttributeValueConversion::encode(self.delegate().value())
    }
}

impl<D: shadow::FileAttribute + ?Sized> native::FileAttribute for Decoded<D> {
    fn name(&self) -> String {
        self.delegate().name()
    }

    fn value(&self) -> native::AttributeValue {
        AttributeValueConversion::decode(self.delegate().value())
    }
}

wrapper_conversion!(
    /// Single file attributes, as passed when creating files. Use
    /// `encode_array` for an argument list of them.
    FileAttributeConversion => FileAttribute
);
