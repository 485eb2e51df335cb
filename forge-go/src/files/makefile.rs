use std::path::PathBuf;

use svcforge_codegen::{PublishedPort, RenderContext, published_ports};
use svcforge_core::GeneratedFile;

/// `Makefile` with build, test, lint and container targets.
///
/// Only `docker-run` depends on the configuration: it forwards the same
/// ports the compose file publishes.
pub struct Makefile<'a> {
    ctx: &'a RenderContext,
}

impl<'a> Makefile<'a> {
    pub fn new(ctx: &'a RenderContext) -> Self {
        Self { ctx }
    }

    fn port_flags(&self) -> String {
        published_ports(self.ctx)
            .iter()
            .map(PublishedPort::mapping)
            .map(|mapping| format!("-p {}", mapping))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl GeneratedFile for Makefile<'_> {
    fn path(&self) -> PathBuf {
        PathBuf::from("Makefile")
    }

    fn render(&self) -> String {
        let ctx = self.ctx;
        let mut out = format!(
            "# Makefile for {name}\n\nAPP_NAME={name}\nBINARY_NAME=main\nDOCKER_IMAGE={image}\nVERSION={version}\n",
            name = ctx.name(),
            // image references must be lowercase
            image = ctx.name().to_lowercase(),
            version = ctx.app_version(),
        );
        out.push_str(TARGETS);
        out.push_str("docker-run: ## Run the container\n");
        out.push_str(&format!(
            "\tdocker run -d --name $(APP_NAME) {} $(DOCKER_IMAGE):latest\n",
            self.port_flags()
        ));
        out.push_str(TRAILER);
        out
    }
}

const TARGETS: &str = r#"
GOCMD=go
GOBUILD=$(GOCMD) build
GOTEST=$(GOCMD) test
GOMOD=$(GOCMD) mod

.PHONY: help install tidy build run dev test test-coverage lint fmt swagger \
	docker-build docker-run docker-stop docker-logs compose-up compose-down clean

.DEFAULT_GOAL := help

-include scripts/proto.mk

help: ## Show available targets
	@awk 'BEGIN {FS = ":.*?## "} /^[a-zA-Z_-]+:.*?## / {printf "  %-18s %s\n", $$1, $$2}' $(MAKEFILE_LIST)

install: ## Download dependencies
	$(GOMOD) download
	$(GOMOD) tidy

tidy: ## Tidy and verify dependencies
	$(GOMOD) tidy
	$(GOMOD) verify

build: ## Build the binary
	$(GOBUILD) -ldflags="-w -s -X main.version=$(VERSION)" -o $(BINARY_NAME) ./cmd

run: build ## Build and run
	./$(BINARY_NAME)

dev: ## Run with live reload when air is installed
	@if command -v air > /dev/null 2>&1; then \
		air; \
	else \
		$(MAKE) run; \
	fi

test: ## Run tests
	$(GOTEST) -v ./...

test-coverage: ## Run tests with coverage
	$(GOTEST) -coverprofile=coverage.out ./...
	$(GOCMD) tool cover -html=coverage.out -o coverage.html

lint: ## Run golangci-lint, falling back to go vet
	@if command -v golangci-lint > /dev/null 2>&1; then \
		golangci-lint run; \
	else \
		$(GOCMD) vet ./...; \
	fi

fmt: ## Format the code
	$(GOCMD) fmt ./...

swagger: ## Generate API documentation
	swag init -g cmd/main.go -o ./docs

docker-build: ## Build the image
	docker build -t $(DOCKER_IMAGE):$(VERSION) -t $(DOCKER_IMAGE):latest .

"#;

const TRAILER: &str = r#"
docker-stop: ## Stop and remove the container
	docker stop $(APP_NAME) || true
	docker rm $(APP_NAME) || true

docker-logs: ## Follow container logs
	docker logs -f $(APP_NAME)

compose-up: ## Start the stack
	docker compose up -d

compose-down: ## Stop the stack
	docker compose down

clean: ## Remove build output
	rm -f $(BINARY_NAME) coverage.out coverage.html
"#;
