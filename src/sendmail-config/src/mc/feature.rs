/*
 * Sendmail configuration generator
 * Copyright (C) 2022 viridIT SAS
 *
 * This program is free software: you can redistribute it and/or modify it under
 * the terms of the GNU General Public License as published by the Free Software
 * Foundation, either version 3 of the License, or any later version.
 *
 * This program is distributed in the hope that it will be useful, but WITHOUT
 * ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
 * FOR A PARTICULAR PURPOSE.  See the GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License along with
 * this program. If not, see https://www.gnu.org/licenses/.
 *
*/

use crate::mc::fragment::{order, Fragment, FragmentKind};

/// One `FEATURE` invocation, e.g. ``FEATURE(`nullclient', `example.com')dnl``.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Feature {
    /// Feature name as it appears in the m4 call.
    pub feature: String,
    /// Positional arguments, each m4-quoted on rendering.
    #[serde(default)]
    pub args: Vec<String>,
}

impl Feature {
    /// A feature without arguments.
    pub fn new(feature: impl Into<String>) -> Self {
        Self {
            feature: feature.into(),
            args: vec![],
        }
    }

    /// A feature with positional arguments.
    pub fn with_args<I, A>(feature: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        Self {
            feature: feature.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Build the `FEATURE` fragment.
    #[must_use]
    pub fn fragment(&self) -> Fragment {
        let mut content = format!("FEATURE(`{}'", self.feature);
        for arg in &self.args {
            content.push_str(&format!(", `{arg}'"));
        }
        content.push_str(")dnl");

        Fragment {
            name: format!("sendmail_mc-feature-{}", self.feature),
            order: order::FEATURE.to_string(),
            content,
            kind: FragmentKind::Feature(self.clone()),
        }
    }
}
