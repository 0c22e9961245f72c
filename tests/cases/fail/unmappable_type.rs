// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use querysmith::Describe;

#[allow(dead_code)]
#[derive(Describe)]
pub struct Settings {
    pub marker: ()
}

fn main() {}
