use fsattr_native as native;
use fsattr_shadow as shadow;

use crate::conversion::Conversion;

/// Opaque attribute values (file keys, named attribute payloads).
///
/// Both hierarchies use `Arc<dyn Any + Send + Sync>`, so the value passes
/// through untouched and keeps its identity.
pub struct AttributeValueConversion;

impl Conversion for AttributeValueConversion {
    type Native = native::AttributeValue;
    type Shadow = shadow::AttributeValue;

    fn encode(value: native::AttributeValue) -> shadow::AttributeValue {
        value
    }

    fn decode(value: shadow::AttributeValue) -> native::AttributeValue {
        value
    }
}
