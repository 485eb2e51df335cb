use std::path::PathBuf;

use svcforge_core::GeneratedFile;

use crate::{GoField, GoFile, GoStruct, Import};

/// `internal/models/models.go`: the `User` and `Product` models.
pub struct ModelsGo;

impl ModelsGo {
    fn user() -> GoStruct {
        GoStruct::new("User")
            .doc("is an account of the service.")
            .field(GoField::new("ID", "int64").tag(r#"json:"id" gorm:"primaryKey;autoIncrement""#))
            .field(GoField::new("Email", "string").tag(r#"json:"email" gorm:"uniqueIndex;not null""#))
            .field(GoField::new("Name", "string").tag(r#"json:"name" gorm:"not null""#))
            .field(GoField::new("CreatedAt", "time.Time").tag(r#"json:"created_at" gorm:"autoCreateTime""#))
            .field(GoField::new("UpdatedAt", "time.Time").tag(r#"json:"updated_at" gorm:"autoUpdateTime""#))
    }

    fn product() -> GoStruct {
        GoStruct::new("Product")
            .doc("is an example catalogue entry.")
            .field(GoField::new("ID", "int64").tag(r#"json:"id" gorm:"primaryKey;autoIncrement""#))
            .field(GoField::new("Name", "string").tag(r#"json:"name" gorm:"not null""#))
            .field(GoField::new("Description", "string").json("description"))
            .field(GoField::new("Price", "float64").tag(r#"json:"price" gorm:"not null""#))
            .field(GoField::new("CreatedAt", "time.Time").tag(r#"json:"created_at" gorm:"autoCreateTime""#))
            .field(GoField::new("UpdatedAt", "time.Time").tag(r#"json:"updated_at" gorm:"autoUpdateTime""#))
    }

    fn table_name(model: &GoStruct, table: &str) -> String {
        format!(
            "// TableName maps {model} to its table.\nfunc ({model}) TableName() string {{\n\treturn \"{table}\"\n}}",
            model = model.name(),
        )
    }
}

impl GeneratedFile for ModelsGo {
    fn path(&self) -> PathBuf {
        PathBuf::from("internal/models/models.go")
    }

    fn render(&self) -> String {
        let user = Self::user();
        let product = Self::product();
        let users_table = Self::table_name(&user, "users");
        let products_table = Self::table_name(&product, "products");
        GoFile::new("models")
            .import(Import::new("time"))
            .add(user)
            .section(&users_table)
            .add(product)
            .section(&products_table)
            .render()
    }
}
