//! dpgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the dpgen
//! Minecraft data pack scaffolder, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            dpgen-cli (CLI)              │
//! │  (InputSource + PostActionHook impls)   │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (ScaffoldService = scaffold engine)   │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, TemplateStore, Renderer,   │
//! │  InputSource, PostActionHook)           │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    dpgen-adapters (Infrastructure)      │
//! │ (LocalFilesystem, BuiltinTemplates ...) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (InputNormalizer, ScaffoldConfig,       │
//! │  FileTree, RenderContext)               │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use dpgen_core::{
//!     application::ScaffoldService,
//!     domain::InputNormalizer,
//! };
//!
//! // 1. Normalize the raw prompt input (never fails)
//! let config = InputNormalizer::normalize("MyPack,myns,A cool pack,15");
//!
//! // 2. Use application service (with injected adapters)
//! let service = ScaffoldService::new(store, renderer, filesystem);
//! let created = service.generate(&config, "./packs").unwrap();
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldOptions, ScaffoldOutcome, ScaffoldService,
        ports::{Filesystem, InputSource, PostActionHook, TemplateRenderer, TemplateStore},
    };
    pub use crate::domain::{
        CreatedRoot, FileTree, InputNormalizer, OpenWindowPolicy, RenderContext, ScaffoldConfig,
        TemplateKind,
    };
    pub use crate::error::{DpgenError, DpgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
