//! A short tour of finite sets.

use fset::prelude::*;

fn main() {
    let a = fset::set![1, 2, 3, 4];
    let b = fset::set![3, 4, 5, 6];
    let c = a.inter(&b);
    let d = a.union(&b);
    let e = a.minus(&b);

    println!("A:     {a}\nB:     {b}\nA ∩ B: {c}\nA ∪ B: {d}\nA − B: {e}");
    println!("A ∩ B ⊂ A: {}", c.ssubset(&a));

    let by_len = Set::with_comparator(
        |fst: &&str, snd: &&str| fst.len() < snd.len(),
        ["zangief", "ryu", "balrog", "vega"],
    );
    println!("By length: {by_len}");
}
