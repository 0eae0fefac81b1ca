//! Application constants

// Hero copy
pub const TITLE: &str = "Hello World";
pub const SUBTITLE: &str = "欢迎来到我的 Next.js 应用 🎉";

// Call-to-action links
pub const DOCS_LABEL: &str = "开始学习";
pub const DOCS_URL: &str = "https://nextjs.org/docs";
pub const SOURCE_LABEL: &str = "查看源码";
pub const SOURCE_URL: &str = "https://github.com";

// New browsing context with no opener and no referrer
pub const NEW_CONTEXT_TARGET: &str = "_blank";
pub const NEW_CONTEXT_REL: &str = "noopener noreferrer";

// Browser integration
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";
pub const LOADING_ELEMENT_ID: &str = "leptos-loading";
