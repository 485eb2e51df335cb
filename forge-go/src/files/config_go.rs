use std::path::PathBuf;

use svcforge_codegen::{RenderContext, builder::CodeBuilder};
use svcforge_core::{GeneratedFile, to_pascal_case};

use crate::{GoField, GoFile, GoStruct, Import, Section, adapters::DatabaseAdapter, sections};

/// `internal/config/config.go`: typed loader for `config.yaml`.
pub struct ConfigGo<'a> {
    ctx: &'a RenderContext,
    database: Option<&'a dyn DatabaseAdapter>,
}

impl<'a> ConfigGo<'a> {
    pub fn new(ctx: &'a RenderContext, database: Option<&'a dyn DatabaseAdapter>) -> Self {
        Self { ctx, database }
    }

    fn root(sections: &[Section]) -> GoStruct {
        GoStruct::new("Config")
            .doc("is the root of config.yaml.")
            .fields(sections.iter().map(|section| {
                GoField::new(section.go_name(), section.type_name()).yaml(section.key())
            }))
    }

    fn section(section: &Section) -> GoStruct {
        GoStruct::new(section.type_name())
            .doc(format!("holds the {} section.", section.key()))
            .fields(section.settings().iter().map(|setting| {
                GoField::new(setting.go_name(), setting.value().go_type()).yaml(setting.key())
            }))
    }

    fn load(&self) -> String {
        let env = self.database.and_then(|adapter| adapter.env_override());
        CodeBuilder::go()
            .comment("Load reads, overrides from the environment and validates the file at path.")
            .block_with_close("func Load(path string) (*Config, error) {", "}", |b| {
                b.text(READ)
                    .blank()
                    .each(env, |b, env| {
                        b.block_with_close(
                            &format!("if value := os.Getenv(\"{}\"); value != \"\" {{", env.var),
                            "}",
                            |b| b.line(&format!("cfg.Database.{} = value", to_pascal_case(env.key))),
                        )
                        .blank()
                    })
                    .text(VALIDATE)
            })
            .build()
    }

    fn validate(&self) -> String {
        CodeBuilder::go()
            .block_with_close("func (c *Config) validate() error {", "}", |b| {
                b.text(VALIDATE_APP)
                    .when(self.ctx.rpc_enabled(), |b| b.text(VALIDATE_GRPC))
                    .line("return nil")
            })
            .build()
    }
}

impl GeneratedFile for ConfigGo<'_> {
    fn path(&self) -> PathBuf {
        PathBuf::from("internal/config/config.go")
    }

    fn render(&self) -> String {
        let sections = sections(self.ctx);
        let file = GoFile::new("config")
            .imports(["errors", "fmt", "os"].map(Import::new))
            .import(Import::new("gopkg.in/yaml.v3"))
            .add(Self::root(&sections));
        let file = sections
            .iter()
            .fold(file, |file, section| file.add(Self::section(section)))
            .section(&self.load())
            .section(&self.validate());

        match self.database {
            Some(adapter) => file
                .section(&format!(
                    "// GetDSN returns the connection string of the configured database.\nfunc (c *Config) GetDSN() string {{\n{}\n}}",
                    adapter.dsn()
                ))
                .render(),
            None => file.render(),
        }
    }
}

const READ: &str = r#"data, err := os.ReadFile(path)
if err != nil {
	return nil, fmt.Errorf("failed to read config %s: %w", path, err)
}

var cfg Config
if err := yaml.Unmarshal(data, &cfg); err != nil {
	return nil, fmt.Errorf("failed to parse config %s: %w", path, err)
}"#;

const VALIDATE: &str = r#"if err := cfg.validate(); err != nil {
	return nil, err
}
return &cfg, nil"#;

const VALIDATE_APP: &str = r#"if c.App.Name == "" {
	return errors.New("app.name is required")
}
if c.App.Port <= 0 || c.App.Port > 65535 {
	return fmt.Errorf("app.port %d is out of range", c.App.Port)
}"#;

const VALIDATE_GRPC: &str = r#"if c.Grpc.Enabled {
	if c.Grpc.Port <= 0 || c.Grpc.Port > 65535 {
		return fmt.Errorf("grpc.port %d is out of range", c.Grpc.Port)
	}
	if c.Grpc.Port == c.App.Port {
		return errors.New("grpc.port must differ from app.port")
	}
}"#;

#[cfg(test)]
mod tests {
    use std::path::Path;

    use svcforge_config::{Database, ProjectConfig};

    use super::*;
    use crate::adapters;

    fn render(database: Database, rpc: bool) -> String {
        let config = ProjectConfig::builder("orders")
            .with_database(database)
            .with_rpc(rpc)
            .resolve_in(Path::new("/work"))
            .unwrap();
        let ctx = RenderContext::new(&config);
        ConfigGo::new(&ctx, adapters::database(database)).render()
    }

    #[test]
    fn test_root_struct_lists_sections() {
        let code = render(Database::Postgres, true);
        assert!(code.contains("\tDatabase DatabaseConfig `yaml:\"database\"`\n"));
        assert!(code.contains("\tGrpc     GrpcConfig     `yaml:\"grpc\"`\n"));
        assert!(code.contains("type GrpcConfig struct {"));
        assert!(code.contains("\tSslMode "));
    }

    #[test]
    fn test_dsn_only_with_database() {
        assert!(!render(Database::None, false).contains("GetDSN"));
        assert!(render(Database::MongoDb, false).contains("\treturn c.Database.Uri\n"));
        assert!(render(Database::InMemory, false).contains("\treturn c.Database.Path\n"));
    }

    #[test]
    fn test_environment_override() {
        assert!(render(Database::Postgres, false).contains(
            "\tif value := os.Getenv(\"DATABASE_HOST\"); value != \"\" {\n\t\tcfg.Database.Host = value\n\t}\n"
        ));
        assert!(render(Database::MongoDb, false).contains("cfg.Database.Uri = value"));
        assert!(!render(Database::InMemory, false).contains("os.Getenv"));
    }

    #[test]
    fn test_grpc_validation_follows_axis() {
        assert!(render(Database::None, true).contains("grpc.port must differ from app.port"));
        assert!(!render(Database::None, false).contains("c.Grpc"));
    }
}
