//! MongoDB adapter using the official driver.

use svcforge_codegen::{Dependency, RenderContext};
use svcforge_config::Database;

use super::{ComposeService, DatabaseAdapter, EnvOverride};
use crate::{GoFile, Import, Setting, versions};

#[derive(Debug, Clone, Copy, Default)]
pub struct MongoAdapter;

impl DatabaseAdapter for MongoAdapter {
    fn database(&self) -> Database {
        Database::MongoDb
    }

    fn dependencies(&self) -> &'static [Dependency] {
        versions::MONGODB
    }

    fn settings(&self, ctx: &RenderContext) -> Vec<Setting> {
        vec![
            Setting::str("type", "mongodb"),
            Setting::str("uri", "mongodb://localhost:27017"),
            Setting::str("name", ctx.name()),
            Setting::int("timeout", 30),
        ]
    }

    fn dsn(&self) -> &'static str {
        "\treturn c.Database.Uri"
    }

    fn implementation(&self, ctx: &RenderContext) -> GoFile {
        GoFile::new("database")
            .in_module(ctx.module_path())
            .import(Import::new("context"))
            .import(Import::new("fmt"))
            .import(Import::new("time"))
            .import(Import::new("go.mongodb.org/mongo-driver/bson"))
            .import(Import::new("go.mongodb.org/mongo-driver/mongo"))
            .import(Import::new("go.mongodb.org/mongo-driver/mongo/options"))
            .import(Import::new(ctx.import("internal/config")))
            .section(MONGO_TYPES)
            .section(MONGO_IMPL)
    }

    fn env_override(&self) -> Option<EnvOverride> {
        Some(EnvOverride {
            var: "DATABASE_URI",
            key: "uri",
        })
    }

    fn compose_service(&self, ctx: &RenderContext) -> Option<ComposeService> {
        Some(ComposeService {
            name: "mongodb",
            image: "mongo:7",
            port: 27017,
            environment: vec![("MONGO_INITDB_DATABASE", ctx.name().to_string())],
            volume: "mongodb_data",
            mount: "/data/db",
            address: "mongodb://mongodb:27017".to_string(),
        })
    }
}

const MONGO_TYPES: &str = r#"// MongoDatabase implements Database for MongoDB.
type MongoDatabase struct {
	client   *mongo.Client
	database *mongo.Database
	config   *config.Config
}

// MongoTx wraps a session running a multi-document transaction.
type MongoTx struct {
	session mongo.Session
	ctx     context.Context
}"#;

const MONGO_IMPL: &str = r#"// New connects to MongoDB and verifies the server is reachable.
func New(cfg *config.Config) (Database, error) {
	ctx, cancel := context.WithTimeout(context.Background(), time.Duration(cfg.Database.Timeout)*time.Second)
	defer cancel()

	client, err := mongo.Connect(ctx, options.Client().ApplyURI(cfg.GetDSN()))
	if err != nil {
		return nil, fmt.Errorf("failed to connect to MongoDB: %w", err)
	}

	if err := client.Ping(ctx, nil); err != nil {
		return nil, fmt.Errorf("failed to ping MongoDB: %w", err)
	}

	return &MongoDatabase{
		client:   client,
		database: client.Database(cfg.Database.Name),
		config:   cfg,
	}, nil
}

// Connect verifies the client can reach the server.
func (m *MongoDatabase) Connect() error {
	return m.Ping()
}

// Close disconnects the client.
func (m *MongoDatabase) Close() error {
	ctx, cancel := context.WithTimeout(context.Background(), 5*time.Second)
	defer cancel()
	return m.client.Disconnect(ctx)
}

// Ping checks the connection.
func (m *MongoDatabase) Ping() error {
	ctx, cancel := context.WithTimeout(context.Background(), 5*time.Second)
	defer cancel()
	return m.client.Ping(ctx, nil)
}

// BeginTx starts a session with an open transaction.
func (m *MongoDatabase) BeginTx(ctx context.Context) (Tx, error) {
	session, err := m.client.StartSession()
	if err != nil {
		return nil, err
	}

	if err := session.StartTransaction(); err != nil {
		session.EndSession(ctx)
		return nil, err
	}

	return &MongoTx{
		session: session,
		ctx:     ctx,
	}, nil
}

// Migrate creates the indexes the models rely on.
func (m *MongoDatabase) Migrate() error {
	ctx, cancel := context.WithTimeout(context.Background(), 10*time.Second)
	defer cancel()

	_, err := m.database.Collection("users").Indexes().CreateOne(ctx, mongo.IndexModel{
		Keys:    bson.D{{Key: "email", Value: 1}},
		Options: options.Index().SetUnique(true),
	})
	return err
}

// Stats is empty: the driver does not expose pool statistics.
func (m *MongoDatabase) Stats() Stats {
	return Stats{}
}

// Database exposes the selected database handle.
func (m *MongoDatabase) Database() *mongo.Database {
	return m.database
}

// Client exposes the driver client.
func (m *MongoDatabase) Client() *mongo.Client {
	return m.client
}

// Commit commits the transaction and ends the session.
func (t *MongoTx) Commit() error {
	defer t.session.EndSession(t.ctx)
	return t.session.CommitTransaction(t.ctx)
}

// Rollback aborts the transaction and ends the session.
func (t *MongoTx) Rollback() error {
	defer t.session.EndSession(t.ctx)
	return t.session.AbortTransaction(t.ctx)
}

// Context returns the context the transaction is bound to.
func (t *MongoTx) Context() context.Context {
	return t.ctx
}"#;
