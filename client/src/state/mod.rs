//! Reactive state types provided through Leptos context.
//!
//! DESIGN
//! ======
//! State structs are plain data with pure transition methods; pages wrap
//! them in `RwSignal` and run side effects (timers, requests) around them.

pub mod directory;
