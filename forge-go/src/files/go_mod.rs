use std::path::PathBuf;

use svcforge_codegen::DependencySet;
use svcforge_core::GeneratedFile;

use crate::GO_VERSION;

/// `go.mod` for the generated module.
pub struct GoMod<'a> {
    module: &'a str,
    dependencies: &'a DependencySet,
}

impl<'a> GoMod<'a> {
    pub fn new(module: &'a str, dependencies: &'a DependencySet) -> Self {
        Self {
            module,
            dependencies,
        }
    }
}

impl GeneratedFile for GoMod<'_> {
    fn path(&self) -> PathBuf {
        PathBuf::from("go.mod")
    }

    fn render(&self) -> String {
        let mut out = format!("module {}\n\ngo {}\n", self.module, GO_VERSION);
        if self.dependencies.is_empty() {
            return out;
        }
        out.push_str("\nrequire (\n");
        for dependency in self.dependencies.iter() {
            out.push_str(&format!(
                "\t{} {}\n",
                dependency.module,
                dependency.version.tag()
            ));
        }
        out.push_str(")\n");
        out
    }
}
