// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use vergen_gitcl::{BuildBuilder, Emitter, GitclBuilder};

fn main() -> Result<(), Box<dyn Error>> {
    let build = BuildBuilder::all_build()?;

    let mut git = GitclBuilder::default();
    let git = git.sha(true).build()?;

    // Outside a git checkout the sha falls back to vergen's placeholder.
    Emitter::default()
        .add_instructions(&build)?
        .add_instructions(&git)?
        .emit()?;

    Ok(())
}
