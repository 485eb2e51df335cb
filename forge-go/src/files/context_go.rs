use std::path::PathBuf;

use svcforge_codegen::RenderContext;
use svcforge_core::GeneratedFile;

use crate::{GoFile, Import};

/// `pkg/context/context.go`: request-scoped context carrying the logger and
/// request identifiers.
pub struct ContextGo<'a> {
    ctx: &'a RenderContext,
}

impl<'a> ContextGo<'a> {
    pub fn new(ctx: &'a RenderContext) -> Self {
        Self { ctx }
    }
}

impl GeneratedFile for ContextGo<'_> {
    fn path(&self) -> PathBuf {
        PathBuf::from("pkg/context/context.go")
    }

    fn render(&self) -> String {
        GoFile::new("context")
            .in_module(self.ctx.module_path())
            .import(Import::new("context"))
            .import(Import::new("time"))
            .import(Import::new(self.ctx.import("pkg/logger")))
            .section(APP_CONTEXT)
            .render()
    }
}

const APP_CONTEXT: &str = r#"// AppContext carries request-scoped values next to a standard context.
type AppContext struct {
	ctx     context.Context
	logger  logger.Logger
	userID  string
	traceID string
}

// New wraps ctx with the given logger.
func New(ctx context.Context, log logger.Logger) *AppContext {
	return &AppContext{
		ctx:    ctx,
		logger: log,
	}
}

// Context returns the underlying standard context.
func (c *AppContext) Context() context.Context {
	return c.ctx
}

// Logger returns the logger enriched with the request identifiers.
func (c *AppContext) Logger() logger.Logger {
	log := c.logger
	if c.traceID != "" {
		log = log.WithField("trace_id", c.traceID)
	}
	if c.userID != "" {
		log = log.WithField("user_id", c.userID)
	}
	return log
}

// WithUserID returns a copy carrying userID.
func (c *AppContext) WithUserID(userID string) *AppContext {
	clone := *c
	clone.userID = userID
	return &clone
}

// UserID returns the authenticated user, if any.
func (c *AppContext) UserID() string {
	return c.userID
}

// WithTraceID returns a copy carrying traceID.
func (c *AppContext) WithTraceID(traceID string) *AppContext {
	clone := *c
	clone.traceID = traceID
	return &clone
}

// TraceID returns the request trace identifier, if any.
func (c *AppContext) TraceID() string {
	return c.traceID
}

// WithTimeout returns a copy whose context is cancelled after timeout.
func (c *AppContext) WithTimeout(timeout time.Duration) (*AppContext, context.CancelFunc) {
	ctx, cancel := context.WithTimeout(c.ctx, timeout)
	clone := *c
	clone.ctx = ctx
	return &clone, cancel
}

// WithDeadline returns a copy whose context is cancelled at deadline.
func (c *AppContext) WithDeadline(deadline time.Time) (*AppContext, context.CancelFunc) {
	ctx, cancel := context.WithDeadline(c.ctx, deadline)
	clone := *c
	clone.ctx = ctx
	return &clone, cancel
}

// Done is closed when the underlying context is cancelled.
func (c *AppContext) Done() <-chan struct{} {
	return c.ctx.Done()
}

// Err reports why the underlying context was cancelled.
func (c *AppContext) Err() error {
	return c.ctx.Err()
}"#;
