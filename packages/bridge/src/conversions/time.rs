use fsattr_native as native;
use fsattr_shadow as shadow;

use crate::conversion::Conversion;

/// Timestamps, copied field by field at full precision.
pub struct FileTimeConversion;

impl Conversion for FileTimeConversion {
    type Native = native::FileTime;
    type Shadow = shadow::FileTime;

    fn encode(value: native::FileTime) -> shadow::FileTime {
        shadow::FileTime::new(value.secs(), value.nanos())
    }

    fn decode(value: shadow::FileTime) -> native::FileTime {
        native::FileTime::new(value.secs(), value.nanos())
    }
}
