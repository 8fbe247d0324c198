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

use crate::Config;

impl Config {
    // Runs on every construction path, so a Config in hand never yields
    // a partial fragment list.
    pub(crate) fn ensure(config: Self) -> anyhow::Result<Self> {
        anyhow::ensure!(
            config.sendmail.msa.enable_ipv4 || config.sendmail.msa.enable_ipv6,
            "The message submission agent must be enabled for IPv4 or IPv6"
        );

        Ok(config)
    }
}
