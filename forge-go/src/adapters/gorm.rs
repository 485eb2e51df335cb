//! GORM adapter for the relational engines.

use svcforge_codegen::{Dependency, RenderContext};
use svcforge_config::Database;

use super::{ComposeService, DatabaseAdapter, EnvOverride};
use crate::{GoFile, Import, Setting, versions};

const PASSWORD: &str = "password";

/// Relational engine driven through GORM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GormDialect {
    Postgres,
    Mysql,
    Sqlite,
}

impl GormDialect {
    fn label(self) -> &'static str {
        match self {
            GormDialect::Postgres => "PostgreSQL",
            GormDialect::Mysql => "MySQL",
            GormDialect::Sqlite => "SQLite",
        }
    }

    /// Package name of the GORM driver, also the `type` settings value.
    fn driver(self) -> &'static str {
        match self {
            GormDialect::Postgres => "postgres",
            GormDialect::Mysql => "mysql",
            GormDialect::Sqlite => "sqlite",
        }
    }

    fn user(self) -> &'static str {
        match self {
            GormDialect::Mysql => "root",
            _ => "postgres",
        }
    }
}

/// Adapter emitting a GORM-backed `Database` implementation.
#[derive(Debug, Clone, Copy)]
pub struct GormAdapter {
    dialect: GormDialect,
}

impl GormAdapter {
    pub const fn new(dialect: GormDialect) -> Self {
        Self { dialect }
    }

    fn pool(&self) -> &'static str {
        match self.dialect {
            // every connection to ":memory:" opens a separate database
            GormDialect::Sqlite => "\tsqlDB.SetMaxOpenConns(cfg.Database.MaxConnections)",
            _ => {
                "\tsqlDB.SetMaxOpenConns(cfg.Database.MaxConnections)\n\tsqlDB.SetMaxIdleConns(cfg.Database.MaxIdleConnections)\n\tsqlDB.SetConnMaxLifetime(time.Hour)"
            }
        }
    }
}

impl DatabaseAdapter for GormAdapter {
    fn database(&self) -> Database {
        match self.dialect {
            GormDialect::Postgres => Database::Postgres,
            GormDialect::Mysql => Database::Mysql,
            GormDialect::Sqlite => Database::InMemory,
        }
    }

    fn dependencies(&self) -> &'static [Dependency] {
        match self.dialect {
            GormDialect::Postgres => versions::POSTGRES,
            GormDialect::Mysql => versions::MYSQL,
            GormDialect::Sqlite => versions::SQLITE,
        }
    }

    fn settings(&self, ctx: &RenderContext) -> Vec<Setting> {
        let kind = Setting::str("type", self.dialect.driver());
        match self.dialect {
            GormDialect::Postgres => vec![
                kind,
                Setting::str("host", "localhost"),
                Setting::int("port", 5432),
                Setting::str("user", self.dialect.user()),
                Setting::str("password", PASSWORD),
                Setting::str("name", ctx.name()),
                Setting::str("ssl_mode", "disable"),
                Setting::int("max_connections", 100),
                Setting::int("max_idle_connections", 10),
            ],
            GormDialect::Mysql => vec![
                kind,
                Setting::str("host", "localhost"),
                Setting::int("port", 3306),
                Setting::str("user", self.dialect.user()),
                Setting::str("password", PASSWORD),
                Setting::str("name", ctx.name()),
                Setting::str("charset", "utf8mb4"),
                Setting::int("max_connections", 100),
                Setting::int("max_idle_connections", 10),
            ],
            GormDialect::Sqlite => vec![
                kind,
                Setting::str("path", ":memory:"),
                Setting::int("max_connections", 1),
            ],
        }
    }

    fn dsn(&self) -> &'static str {
        match self.dialect {
            GormDialect::Postgres => {
                r#"	return fmt.Sprintf("host=%s port=%d user=%s password=%s dbname=%s sslmode=%s",
		c.Database.Host, c.Database.Port, c.Database.User, c.Database.Password, c.Database.Name, c.Database.SslMode)"#
            }
            GormDialect::Mysql => {
                r#"	return fmt.Sprintf("%s:%s@tcp(%s:%d)/%s?charset=%s&parseTime=True&loc=Local",
		c.Database.User, c.Database.Password, c.Database.Host, c.Database.Port, c.Database.Name, c.Database.Charset)"#
            }
            GormDialect::Sqlite => "\treturn c.Database.Path",
        }
    }

    fn implementation(&self, ctx: &RenderContext) -> GoFile {
        let label = self.dialect.label();
        let driver = self.dialect.driver();

        let constructor = format!(
            r#"// New opens a {label} connection pool.
func New(cfg *config.Config) (Database, error) {{
	gormConfig := &gorm.Config{{
		Logger: gormlogger.Default.LogMode(gormlogger.Info),
	}}
	if !cfg.App.Debug {{
		gormConfig.Logger = gormlogger.Default.LogMode(gormlogger.Silent)
	}}

	db, err := gorm.Open({driver}.Open(cfg.GetDSN()), gormConfig)
	if err != nil {{
		return nil, fmt.Errorf("failed to connect to {label}: %w", err)
	}}

	sqlDB, err := db.DB()
	if err != nil {{
		return nil, fmt.Errorf("failed to get sql.DB: %w", err)
	}}
{pool}

	return &GormDatabase{{
		db:     db,
		config: cfg,
	}}, nil
}}"#,
            pool = self.pool(),
        );

        GoFile::new("database")
            .in_module(ctx.module_path())
            .import(Import::new("context"))
            .import(Import::new("fmt"))
            .imports((self.dialect != GormDialect::Sqlite).then(|| Import::new("time")))
            .import(Import::new(format!("gorm.io/driver/{}", driver)))
            .import(Import::new("gorm.io/gorm"))
            .import(Import::new("gorm.io/gorm/logger").alias("gormlogger"))
            .import(Import::new(ctx.import("internal/config")))
            .import(Import::new(ctx.import("internal/models")))
            .section(&format!(
                "// GormDatabase implements Database for {} through GORM.\ntype GormDatabase struct {{\n\tdb     *gorm.DB\n\tconfig *config.Config\n}}",
                label
            ))
            .section(GORM_TX)
            .section(&constructor)
            .section(GORM_METHODS)
    }

    fn env_override(&self) -> Option<EnvOverride> {
        match self.dialect {
            GormDialect::Sqlite => None,
            _ => Some(EnvOverride {
                var: "DATABASE_HOST",
                key: "host",
            }),
        }
    }

    fn compose_service(&self, ctx: &RenderContext) -> Option<ComposeService> {
        match self.dialect {
            GormDialect::Postgres => Some(ComposeService {
                name: "postgres",
                image: "postgres:15-alpine",
                port: 5432,
                environment: vec![
                    ("POSTGRES_DB", ctx.name().to_string()),
                    ("POSTGRES_USER", self.dialect.user().to_string()),
                    ("POSTGRES_PASSWORD", PASSWORD.to_string()),
                ],
                volume: "postgres_data",
                mount: "/var/lib/postgresql/data",
                address: "postgres".to_string(),
            }),
            GormDialect::Mysql => Some(ComposeService {
                name: "mysql",
                image: "mysql:8.0",
                port: 3306,
                environment: vec![
                    ("MYSQL_DATABASE", ctx.name().to_string()),
                    ("MYSQL_ROOT_PASSWORD", PASSWORD.to_string()),
                ],
                volume: "mysql_data",
                mount: "/var/lib/mysql",
                address: "mysql".to_string(),
            }),
            GormDialect::Sqlite => None,
        }
    }

    fn requires_cgo(&self) -> bool {
        self.dialect == GormDialect::Sqlite
    }
}

const GORM_TX: &str = r#"// GormTx wraps a GORM transaction.
type GormTx struct {
	tx  *gorm.DB
	ctx context.Context
}"#;

const GORM_METHODS: &str = r#"// Connect verifies the pool can reach the server.
func (d *GormDatabase) Connect() error {
	return d.Ping()
}

// Close closes the underlying pool.
func (d *GormDatabase) Close() error {
	sqlDB, err := d.db.DB()
	if err != nil {
		return err
	}
	return sqlDB.Close()
}

// Ping checks the connection.
func (d *GormDatabase) Ping() error {
	sqlDB, err := d.db.DB()
	if err != nil {
		return err
	}
	return sqlDB.Ping()
}

// BeginTx starts a transaction bound to ctx.
func (d *GormDatabase) BeginTx(ctx context.Context) (Tx, error) {
	tx := d.db.WithContext(ctx).Begin()
	if tx.Error != nil {
		return nil, tx.Error
	}
	return &GormTx{
		tx:  tx,
		ctx: ctx,
	}, nil
}

// Migrate creates or updates the tables of every model.
func (d *GormDatabase) Migrate() error {
	return d.db.AutoMigrate(&models.User{}, &models.Product{})
}

// Stats reports connection pool statistics.
func (d *GormDatabase) Stats() Stats {
	sqlDB, err := d.db.DB()
	if err != nil {
		return Stats{}
	}

	stats := sqlDB.Stats()
	return Stats{
		OpenConnections:  stats.OpenConnections,
		InUseConnections: stats.InUse,
		IdleConnections:  stats.Idle,
	}
}

// DB exposes the GORM handle.
func (d *GormDatabase) DB() *gorm.DB {
	return d.db
}

// Commit commits the transaction.
func (t *GormTx) Commit() error {
	return t.tx.Commit().Error
}

// Rollback aborts the transaction.
func (t *GormTx) Rollback() error {
	return t.tx.Rollback().Error
}

// Context returns the context the transaction is bound to.
func (t *GormTx) Context() context.Context {
	return t.ctx
}"#;
