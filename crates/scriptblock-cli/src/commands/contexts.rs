use miette::Result;

use scriptblock_core::context::block_table;

pub fn exec() -> Result<()> {
    for (context, block) in block_table() {
        println!("{:<10} {}", context, block);
    }
    Ok(())
}
