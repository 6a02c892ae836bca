use ron::{Options, extensions::Extensions};

pub mod options;

/// The RON extensions every file written by the game is read and written with.
pub const RON_EXTENSIONS: Extensions = Extensions::UNWRAP_NEWTYPES
    .union(Extensions::IMPLICIT_SOME)
    .union(Extensions::UNWRAP_VARIANT_NEWTYPES);

pub fn ron_options() -> Options {
    Options::default().with_default_extension(RON_EXTENSIONS)
}
