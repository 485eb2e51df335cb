use std::path::PathBuf;

use svcforge_codegen::RenderContext;
use svcforge_core::GeneratedFile;

use crate::{GoFile, Import};

/// `internal/repository/user.go`: the `User` repository skeleton.
pub struct RepositoryGo<'a> {
    ctx: &'a RenderContext,
}

impl<'a> RepositoryGo<'a> {
    pub fn new(ctx: &'a RenderContext) -> Self {
        Self { ctx }
    }
}

impl GeneratedFile for RepositoryGo<'_> {
    fn path(&self) -> PathBuf {
        PathBuf::from("internal/repository/user.go")
    }

    fn render(&self) -> String {
        GoFile::new("repository")
            .in_module(self.ctx.module_path())
            .import(Import::new("errors"))
            .import(Import::new(self.ctx.import("internal/models")))
            .import(Import::new(self.ctx.import("pkg/database")))
            .section(USER_REPOSITORY)
            .render()
    }
}

const USER_REPOSITORY: &str = r#"// ErrNotImplemented is returned by repository methods that still need a query.
var ErrNotImplemented = errors.New("repository: not implemented")

// UserRepository manages users.
type UserRepository interface {
	database.Repository
	GetByID(id int64) (*models.User, error)
	GetByEmail(email string) (*models.User, error)
	Create(user *models.User) error
	Update(user *models.User) error
	Delete(id int64) error
	List(offset, limit int) ([]*models.User, error)
}

// UserRepositoryImpl implements UserRepository.
type UserRepositoryImpl struct {
	*database.BaseRepository
}

// NewUserRepository creates a user repository on db.
func NewUserRepository(db database.Database) UserRepository {
	return &UserRepositoryImpl{
		BaseRepository: database.NewBaseRepository(db),
	}
}

// GetByID finds a user by primary key.
func (r *UserRepositoryImpl) GetByID(id int64) (*models.User, error) {
	return nil, ErrNotImplemented
}

// GetByEmail finds a user by email address.
func (r *UserRepositoryImpl) GetByEmail(email string) (*models.User, error) {
	return nil, ErrNotImplemented
}

// Create stores a new user.
func (r *UserRepositoryImpl) Create(user *models.User) error {
	return ErrNotImplemented
}

// Update stores changes to an existing user.
func (r *UserRepositoryImpl) Update(user *models.User) error {
	return ErrNotImplemented
}

// Delete removes a user.
func (r *UserRepositoryImpl) Delete(id int64) error {
	return ErrNotImplemented
}

// List returns one page of users.
func (r *UserRepositoryImpl) List(offset, limit int) ([]*models.User, error) {
	return nil, ErrNotImplemented
}"#;
