// papirmania shared library
//
// everything in here has to compile for both the browser (wasm32) and the
// server, so nothing in this crate may touch tokio or the filesystem.  the
// network calls all go through gloo-net, which only works in the browser,
// but the types and the normalization logic are shared with the server

pub mod cms;
pub mod contact;
pub mod content;
pub mod fallback;
pub mod normalize;
pub mod slug;

// same-origin path of the contact relay, mounted by the server and called by
// the webapp
pub const CONTACT_PATH: &str = "/api/contact";

// generic placeholder used whenever an image reference cannot be resolved
pub const PLACEHOLDER_IMAGE: &str = "/images/img_placeholder_image.png";

// fallback edge length for gallery images that arrive without dimensions
pub const GALLERY_FALLBACK_SIZE: u32 = 404;
