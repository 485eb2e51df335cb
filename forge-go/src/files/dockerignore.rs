use std::path::PathBuf;

use svcforge_core::GeneratedFile;

pub struct DockerIgnore;

impl GeneratedFile for DockerIgnore {
    fn path(&self) -> PathBuf {
        PathBuf::from(".dockerignore")
    }

    fn render(&self) -> String {
        DOCKERIGNORE.to_string()
    }
}

const DOCKERIGNORE: &str = "\
# Git
.git
.gitignore

# Docker
Dockerfile
.dockerignore
docker-compose.yml

# Environment
.env
.env.*

# Editors
.vscode/
.idea/
*.swp

# OS
.DS_Store
Thumbs.db

# Logs
*.log
logs/

# Tests
*_test.go
coverage.out
coverage.html

# Build output
main
*.exe
dist/
build/
tmp/
";
