//! # raml2ts
//!
//! **raml2ts** converts a declarative RAML-style API description into a
//! statically-typed TypeScript client: one class with one async method
//! per endpoint, one `…Param` interface per endpoint with declared
//! parameters, and one `…Response` interface tree per endpoint with an
//! example payload.
//!
//! ## Architecture
//!
//! - **[`spec`]** - spec parsing: a generic tagged tree, endpoint
//!   extraction, and trait resolution
//! - **[`generator`]** - identifier derivation, parameter typing,
//!   response type inference from example JSON, and Askama-based
//!   rendering of the client source
//! - **[`validator`]** - batched reporting of generation-time defects
//! - **[`cli`]** - the `raml2ts-gen` command line
//!
//! ## Pipeline
//!
//! ```text
//! RAML text ─→ SpecNode tree ─→ Vec<Endpoint> ─→ trait resolution
//!           ─→ (names | params | response inference) ─→ client.ts
//! ```
//!
//! Every stage after extraction is a pure function of one endpoint
//! record, so derivations are independently testable; interface-name
//! uniqueness is verified in a single post-pass over the full set.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin raml2ts-gen -- generate --spec api/api-ja.raml --output src/api.ts
//! ```
//!
//! ```rust,ignore
//! use raml2ts::generator::{render_client_from_api, ClientConfig};
//!
//! let spec = raml2ts::load_spec("api/api-ja.raml")?;
//! let source = render_client_from_api(&spec, &ClientConfig::default())?;
//! ```

pub mod cli;
pub mod generator;
pub mod spec;
pub mod validator;

pub use spec::{load_spec, parse_spec, ApiSpec, Endpoint, HttpMethod, ParamDecl};
