use strum::{AsRefStr, EnumIter, EnumString};

/// Commands accepted on `<prefix>.<command>` subjects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum ProductCommand {
    CreateProduct,
    FindAllProducts,
    FindOneProduct,
    UpdateProduct,
    DeleteProduct,
    SoftDeleteProduct,
    FindDeletedProducts,
    ValidateProducts,
}
