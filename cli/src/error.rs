// SPDX-FileCopyrightText: Copyright (c) 2025 The powervs-rust-sdk Authors
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use powervs_http::config::ConfigError;
use std::error::Error as StdError;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::io::Error as IoError;
use std::path::PathBuf;
use toml::de::Error as TomlError;

/// Command-line client errors.
#[derive(Debug)]
pub enum Error {
    ReadConfig(PathBuf, IoError),
    Toml(PathBuf, TomlError),
    Config(ConfigError),
    UnknownOperation(String),
    InvalidBody(serde_json::Error),
    Service(powervs::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Self::ReadConfig(path, error) => {
                write!(f, "cannot read config file {}: {error}", path.display())
            }
            Self::Toml(path, error) => {
                write!(f, "invalid config file {}: {error}", path.display())
            }
            Self::Config(error) => write!(f, "configuration error: {error}"),
            Self::UnknownOperation(id) => {
                write!(f, "unknown operation '{id}'; see `powervs operations`")
            }
            Self::InvalidBody(error) => write!(f, "request body is not valid JSON: {error}"),
            Self::Service(error) => write!(f, "{error}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::ReadConfig(_, e) => Some(e),
            Self::Toml(_, e) => Some(e),
            Self::Config(e) => Some(e),
            Self::InvalidBody(e) => Some(e),
            Self::Service(e) => Some(e),
            Self::UnknownOperation(_) => None,
        }
    }
}

impl From<ConfigError> for Error {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<powervs::Error> for Error {
    fn from(value: powervs::Error) -> Self {
        Self::Service(value)
    }
}
