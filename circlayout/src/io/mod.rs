/// External (serializable) representations of the entities within the library.
pub mod ext_repr;

/// All logic for exporting internal representations into external ones
pub mod export;

/// All logic for creating SVG from [`Arrangement`](crate::Arrangement)s
pub mod svg;

/// Rasterizing [`Arrangement`](crate::Arrangement)s into monochrome bitmaps
pub mod bitmap;
