//! Library half of the `hashmark` binary, so that integration tests and the build script can
//! share the transform table.

pub mod transforms;
