//! next.config.mjs template
//!
//! Enables minification and aggressive chunk splitting for production builds only,
//! and lets `next/image` load from any https host.

use crate::error::ScaffoldError;
use std::path::{Path, PathBuf};
use tokio::fs;

/// File name of the framework config inside the generated project
pub const FRAMEWORK_CONFIG_FILE: &str = "next.config.mjs";

/// Framework config written into every generated project
pub const FRAMEWORK_CONFIG: &str = r#"
/** @type {import('next').NextConfig} */
const nextConfig = {
  webpack(config, { isServer }) {
    if (process.env.NODE_ENV === 'production') {
      config.optimization = {
        ...config.optimization,
        minimize: true,
        splitChunks: {
          chunks: 'all',
          maxInitialRequests: Infinity,
          minSize: 0,
        },
      };
    }
    return config;
  },
  images: {
    remotePatterns: [
      {
        protocol: 'https',
        hostname: '**',
        port: '',
        pathname: '**',
      },
    ],
  },
};

export default nextConfig;
  "#;

/// Overwrite `next.config.mjs` in `project_dir`, returning the written path
pub async fn write_framework_config(project_dir: &Path) -> Result<PathBuf, ScaffoldError> {
    let path = project_dir.join(FRAMEWORK_CONFIG_FILE);
    fs::write(&path, FRAMEWORK_CONFIG).await?;
    Ok(path)
}
