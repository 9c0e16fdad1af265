pub mod engine;
pub mod fingerprint;
pub mod pair;

pub use engine::{PreviewEngine, PreviewFrame, PreviewStats};
pub use fingerprint::{EngravingFingerprint, MaterialFingerprint, MeshFingerprint, StoneFingerprint};
pub use pair::PairPreview;
