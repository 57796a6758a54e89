//! Passthrough `Maskable` implementations for scalar-like types.

use std::{
    borrow::Cow,
    cmp::Ordering,
    marker::PhantomData,
    net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6},
    num::{
        NonZeroI8, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI128, NonZeroIsize, NonZeroU8,
        NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU128, NonZeroUsize,
    },
    path::PathBuf,
    time::{Duration, Instant, SystemTime},
};

use super::impl_maskable_passthrough;
use crate::{
    engine::Masker,
    record::{FieldDescriptor, Maskable},
};

// =============================================================================
// Scalars and primitives
// =============================================================================

impl_maskable_passthrough!(bool, char, ());

impl_maskable_passthrough!(i8, i16, i32, i64, i128, isize);
impl_maskable_passthrough!(u8, u16, u32, u64, u128, usize);
impl_maskable_passthrough!(f32, f64);

impl_maskable_passthrough!(
    NonZeroI8,
    NonZeroI16,
    NonZeroI32,
    NonZeroI64,
    NonZeroI128,
    NonZeroIsize,
    NonZeroU8,
    NonZeroU16,
    NonZeroU32,
    NonZeroU64,
    NonZeroU128,
    NonZeroUsize,
);

// =============================================================================
// Other std types
// =============================================================================

impl_maskable_passthrough!(Duration, Instant, SystemTime, Ordering, PathBuf);

impl_maskable_passthrough!(
    IpAddr,
    Ipv4Addr,
    Ipv6Addr,
    SocketAddr,
    SocketAddrV4,
    SocketAddrV6,
);

// A bare `String` has no directive and is copied; a record field that
// carries one is masked.
impl Maskable for String {
    fn mask_with(&self, _masker: &Masker) -> Self {
        self.clone()
    }

    fn mask_directed(&self, masker: &Masker, field: &FieldDescriptor) -> Self {
        masker.mask_field(self, field)
    }
}

impl Maskable for Cow<'_, str> {
    fn mask_with(&self, _masker: &Masker) -> Self {
        self.clone()
    }
}

// Only string slices: a reference to a record cannot be rebuilt with its
// fields masked, so such fields must be owned or `#[mask(skip)]`.
impl Maskable for &str {
    fn mask_with(&self, _masker: &Masker) -> Self {
        *self
    }
}

impl<T: ?Sized> Maskable for PhantomData<T> {
    fn mask_with(&self, _masker: &Masker) -> Self {
        PhantomData
    }
}

// =============================================================================
// Date/time passthrough implementations (feature-gated)
// =============================================================================

#[cfg(feature = "chrono")]
mod chrono_passthrough {
    use chrono::{
        DateTime, Duration, FixedOffset, Local, Month, NaiveDate, NaiveDateTime, NaiveTime, Utc,
        Weekday,
    };

    use super::impl_maskable_passthrough;

    impl_maskable_passthrough!(DateTime<Utc>, DateTime<Local>, DateTime<FixedOffset>, Utc);
    impl_maskable_passthrough!(NaiveDateTime, NaiveDate, NaiveTime);
    // TimeDelta is an alias for Duration
    impl_maskable_passthrough!(Duration, Month, Weekday);
}

#[cfg(feature = "time")]
mod time_passthrough {
    use time::{
        Date, Duration, Month, OffsetDateTime, PrimitiveDateTime, Time, UtcOffset, Weekday,
    };

    use super::impl_maskable_passthrough;

    impl_maskable_passthrough!(OffsetDateTime, PrimitiveDateTime, Date, Time, UtcOffset);
    impl_maskable_passthrough!(Duration, Month, Weekday);
}

#[cfg(feature = "uuid")]
mod uuid_passthrough {
    use uuid::Uuid;

    use super::impl_maskable_passthrough;

    impl_maskable_passthrough!(Uuid);
}

// Dynamic JSON carries no directives; it is copied like any other value.
#[cfg(feature = "json")]
impl_maskable_passthrough!(serde_json::Value);
