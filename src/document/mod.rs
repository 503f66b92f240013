mod node;
mod path;

pub use node::Element;
