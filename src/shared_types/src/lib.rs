//! Foreign type definitions for the DawnDoor shells are produced by the build script.
