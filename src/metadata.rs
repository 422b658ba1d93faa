// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use directories::ProjectDirs;
use inflector::Inflector;
use once_cell::sync::Lazy;

pub(crate) const STATE_FILE_NAME: &str = "keypair.json";

pub(crate) static APPLICATION_NAME: Lazy<String> =
    Lazy::new(|| option_env!("CARGO_PKG_NAME").unwrap_or("ssh-keypair").to_owned());
pub(crate) static APPLICATION_DISPLAY_NAME: Lazy<String> =
    Lazy::new(|| APPLICATION_NAME.to_title_case());

pub(crate) static PROJECT_DIRS: Lazy<Option<ProjectDirs>> =
    Lazy::new(|| ProjectDirs::from("com", "NoahFontes", &APPLICATION_DISPLAY_NAME));
