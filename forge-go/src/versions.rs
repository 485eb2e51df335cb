//! Pinned Go module versions.
//!
//! Every `require` line of the generated `go.mod` comes from one of these
//! tables. A module shared by several tables (gorm) is pinned to the same
//! version everywhere; the manifest renderer rejects any disagreement.

use svcforge_codegen::Dependency;
use svcforge_core::Version;

/// `go` directive of the generated manifest.
pub const GO_VERSION: &str = "1.21";

/// Base image tag used by the Dockerfile build stage.
pub(crate) const GO_IMAGE: &str = "golang:1.21-alpine";

const GORM: Dependency = Dependency::new("gorm.io/gorm", Version::new(1, 25, 5));

/// Required by every project regardless of configuration.
pub(crate) const BASELINE: &[Dependency] = &[
    Dependency::new("gopkg.in/yaml.v3", Version::new(3, 0, 1)),
    Dependency::new("github.com/swaggo/swag", Version::new(1, 16, 2)),
    Dependency::new("github.com/sirupsen/logrus", Version::new(1, 9, 3)),
    Dependency::new("github.com/joho/godotenv", Version::new(1, 4, 0)),
];

pub(crate) const GIN: &[Dependency] = &[
    Dependency::new("github.com/gin-gonic/gin", Version::new(1, 9, 1)),
    Dependency::new("github.com/swaggo/gin-swagger", Version::new(1, 6, 0)),
    Dependency::new("github.com/swaggo/files", Version::new(1, 0, 1)),
];

pub(crate) const FIBER: &[Dependency] = &[
    Dependency::new("github.com/gofiber/fiber/v2", Version::new(2, 52, 0)),
    Dependency::new("github.com/gofiber/swagger", Version::new(1, 0, 0)),
];

pub(crate) const ECHO: &[Dependency] = &[
    Dependency::new("github.com/labstack/echo/v4", Version::new(4, 11, 4)),
    Dependency::new("github.com/swaggo/echo-swagger", Version::new(1, 4, 1)),
];

pub(crate) const POSTGRES: &[Dependency] = &[
    Dependency::new("github.com/lib/pq", Version::new(1, 10, 9)),
    GORM,
    Dependency::new("gorm.io/driver/postgres", Version::new(1, 5, 4)),
];

pub(crate) const MYSQL: &[Dependency] = &[
    Dependency::new("github.com/go-sql-driver/mysql", Version::new(1, 7, 1)),
    GORM,
    Dependency::new("gorm.io/driver/mysql", Version::new(1, 5, 2)),
];

pub(crate) const SQLITE: &[Dependency] = &[
    GORM,
    Dependency::new("gorm.io/driver/sqlite", Version::new(1, 5, 4)),
];

pub(crate) const MONGODB: &[Dependency] = &[Dependency::new(
    "go.mongodb.org/mongo-driver",
    Version::new(1, 13, 1),
)];

pub(crate) const GRPC: &[Dependency] = &[
    Dependency::new("google.golang.org/grpc", Version::new(1, 60, 1)),
    Dependency::new("google.golang.org/protobuf", Version::new(1, 31, 0)),
];
