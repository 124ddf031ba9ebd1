//! 判定サーバーAPI連携

mod compare;

pub use compare::{compare_faces, reference_image_url};
