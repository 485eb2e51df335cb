use std::path::PathBuf;

use svcforge_core::GeneratedFile;

/// `scripts/proto.mk`: protobuf regeneration targets, included by the Makefile.
pub struct ProtoMk;

impl GeneratedFile for ProtoMk {
    fn path(&self) -> PathBuf {
        PathBuf::from("scripts/proto.mk")
    }

    fn render(&self) -> String {
        PROTO_MK.to_string()
    }
}

const PROTO_MK: &str = r#"# Protobuf code generation

PROTO_DIR=api/proto
PB_DIR=internal/grpc/pb

.PHONY: proto-gen proto-install proto-clean

proto-gen: ## Generate Go code from the proto files
	@mkdir -p $(PB_DIR)
	protoc \
		--proto_path=$(PROTO_DIR) \
		--go_out=$(PB_DIR) \
		--go_opt=paths=source_relative \
		--go-grpc_out=$(PB_DIR) \
		--go-grpc_opt=paths=source_relative \
		$(PROTO_DIR)/*.proto

proto-install: ## Install the protoc Go plugins
	go install google.golang.org/protobuf/cmd/protoc-gen-go@latest
	go install google.golang.org/grpc/cmd/protoc-gen-go-grpc@latest

proto-clean: ## Remove generated protobuf code
	rm -f $(PB_DIR)/*.pb.go
"#;
