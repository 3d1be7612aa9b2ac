#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldAttribute {
    Descriptor(String),
    Skip,
}

#[derive(Debug, PartialEq, Eq)]
pub struct DeriveParameter {
    pub field_name: syn::Ident,
    pub descriptor: String,
}

#[derive(Debug, PartialEq, Eq)]
pub struct DeriveParser {
    pub struct_name: syn::Ident,
    pub parameters: Vec<DeriveParameter>,
}
