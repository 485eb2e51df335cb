use std::path::PathBuf;

use svcforge_codegen::RenderContext;
use svcforge_core::GeneratedFile;

use crate::{GoFile, Import};

/// `pkg/database/interface.go`: engine-agnostic persistence contract.
pub struct InterfaceGo<'a> {
    ctx: &'a RenderContext,
}

impl<'a> InterfaceGo<'a> {
    pub fn new(ctx: &'a RenderContext) -> Self {
        Self { ctx }
    }
}

impl GeneratedFile for InterfaceGo<'_> {
    fn path(&self) -> PathBuf {
        PathBuf::from("pkg/database/interface.go")
    }

    fn render(&self) -> String {
        GoFile::new("database")
            .in_module(self.ctx.module_path())
            .import(Import::new("context"))
            .import(Import::new(self.ctx.import("pkg/context")).alias("appcontext"))
            .import(Import::new(self.ctx.import("pkg/logger")))
            .section(CONTRACT)
            .section(BASE_REPOSITORY)
            .render()
    }
}

const CONTRACT: &str = r#"// Database is implemented by every supported engine.
type Database interface {
	Connect() error
	Close() error
	Ping() error

	BeginTx(ctx context.Context) (Tx, error)

	Migrate() error

	Stats() Stats
}

// Tx is an open transaction.
type Tx interface {
	Commit() error
	Rollback() error
	Context() context.Context
}

// Stats describes the connection pool.
type Stats struct {
	OpenConnections  int
	InUseConnections int
	IdleConnections  int
}

// Repository is embedded by every repository.
type Repository interface {
	SetContext(ctx *appcontext.AppContext)
	GetContext() *appcontext.AppContext
}"#;

const BASE_REPOSITORY: &str = r#"// BaseRepository provides the Repository plumbing.
type BaseRepository struct {
	ctx *appcontext.AppContext
	db  Database
}

// NewBaseRepository creates a repository bound to db.
func NewBaseRepository(db Database) *BaseRepository {
	return &BaseRepository{
		db: db,
	}
}

// SetContext binds the request context.
func (r *BaseRepository) SetContext(ctx *appcontext.AppContext) {
	r.ctx = ctx
}

// GetContext returns the bound request context.
func (r *BaseRepository) GetContext() *appcontext.AppContext {
	return r.ctx
}

// DB returns the database the repository works on.
func (r *BaseRepository) DB() Database {
	return r.db
}

// Logger returns the request logger, or nil before SetContext.
func (r *BaseRepository) Logger() logger.Logger {
	if r.ctx != nil {
		return r.ctx.Logger()
	}
	return nil
}"#;
