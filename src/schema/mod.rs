mod component;
mod registry;
mod schema;

pub use component::ComponentKind;
pub use registry::SchemaRegistry;
pub use schema::LabelSchema;
