// Crate-internal.
// ---

pub(crate) mod sample_data;

pub(crate) mod standard_tax_configs {
    pub(crate) mod korea;
    pub(crate) mod us;
}

// Public exports.
// ---

pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported under `ext` in the root of the
    // crate.

    pub mod sample_data {
        pub use crate::impl_ext::sample_data::*;
    }

    pub mod standard_tax_configs {
        pub use crate::impl_ext::standard_tax_configs::korea::*;
        pub use crate::impl_ext::standard_tax_configs::us::*;
    }
}
