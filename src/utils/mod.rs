// Utilities Module
//
// Path conversion and ignore-file handling shared by the walker and scheduler.

pub mod ignore;
pub mod paths;
