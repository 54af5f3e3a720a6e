//! Editor engine for the linkboard box-and-connector canvas.
//!
//! This crate is compiled natively for tests and tooling and to WebAssembly
//! for the browser client. It owns the whole editing model: the document of
//! boxes and connections, the pan/zoom camera, connector geometry, hit-testing
//! of box chrome, and the gesture state machine that turns raw pointer input
//! into document mutations. The host UI only wires DOM events to the engine and
//! renders what the engine reports through [`engine::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Input handlers and editing operations ([`engine::EngineCore`]) |
//! | [`doc`] | In-memory store of boxes and connections |
//! | [`camera`] | Pan/zoom camera and screen/world conversions |
//! | [`geometry`] | Connector centers, connection lines, canvas extent |
//! | [`hit`] | Hit-testing against box chrome and connection delete buttons |
//! | [`input`] | Input event types and the gesture state machine |
//! | [`profile`] | Save/load JSON document codec |
//! | [`svg`] | Standalone SVG export of a diagram |
//! | [`color`] | CSS color normalization |
//! | [`consts`] | Shared numeric constants (default sizes, zoom factors, chrome layout) |

pub mod camera;
pub mod color;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod geometry;
pub mod hit;
pub mod input;
pub mod profile;
pub mod svg;
