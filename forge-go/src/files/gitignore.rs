use std::path::PathBuf;

use svcforge_core::GeneratedFile;

pub struct GitIgnore;

impl GeneratedFile for GitIgnore {
    fn path(&self) -> PathBuf {
        PathBuf::from(".gitignore")
    }

    fn render(&self) -> String {
        GITIGNORE.to_string()
    }
}

const GITIGNORE: &str = "\
# Binaries
main
*.exe
*.dll
*.so
*.dylib
*.test

# Coverage
*.out
coverage.html

# Dependencies
vendor/

# Environment
.env
.env.local

# Editors
.vscode/
.idea/
*.swp
*~

# OS
.DS_Store
Thumbs.db

# Build output
dist/
build/
tmp/
";
