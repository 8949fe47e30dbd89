pub mod error;
pub mod num;
pub mod range;

pub use error::{Error, Result};
pub use range::{Rupq, Rurq};

use num::{lowbit, Element, HasAddIdent, HasMulIdent};

/// 1-indexedのFenwick木 (Binary Indexed Tree)。
///
/// `tree[i]`は区間`(i - lowbit(i), i]`の要素の和を保持する。`tree[0]`は使わない。
#[derive(Clone, Debug)]
pub struct FenwickTree<T> {
    tree: Box<[T]>,
}

impl<T: Element> FenwickTree<T> {
    /// 全要素が`0`の長さ`n`のFenwick木を構築する。
    pub fn new(n: usize) -> Self {
        Self {
            tree: std::iter::repeat_with(|| T::IDENT).take(n + 1).collect(),
        }
    }

    /// データのスライスからO(n)で構築する。
    pub fn from_slice(values: &[T]) -> Self {
        values.iter().cloned().collect()
    }

    /// `[1, m]`に値をとる項目の多重集合から、各値の出現回数を要素とするFenwick木を構築する。
    ///
    /// 範囲外の項目は無視する。
    pub fn from_multiset<I>(m: usize, items: I) -> Self
    where
        T: HasMulIdent,
        I: IntoIterator,
        I::Item: TryInto<usize>,
    {
        let mut freq = std::iter::repeat_with(|| <T as HasAddIdent>::IDENT)
            .take(m)
            .collect::<Vec<_>>();
        let mut skipped = 0usize;
        for item in items {
            match TryInto::<usize>::try_into(item) {
                Ok(v) if (1..=m).contains(&v) => {
                    freq[v - 1] = freq[v - 1].clone() + <T as HasMulIdent>::IDENT;
                }
                _ => skipped += 1,
            }
        }
        #[cfg(feature = "tracing")]
        if skipped > 0 {
            tracing::debug!(skipped, domain = m, "ignored items outside the domain");
        }
        #[cfg(not(feature = "tracing"))]
        let _ = skipped;
        Self {
            tree: Self::build(freq),
        }
    }

    /// 内容を`values`で置き換えてO(n)で再構築する。長さは`values`の長さになる。
    pub fn rebuild<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.tree = Self::build(values);
    }

    /// 各要素を子から親へ一度だけ足し込むことで、n回の更新を使わずにO(n)で構築する。
    fn build<I>(values: I) -> Box<[T]>
    where
        I: IntoIterator<Item = T>,
    {
        let mut tree = std::iter::once(T::IDENT)
            .chain(values)
            .collect::<Box<[_]>>();
        let n = tree.len() - 1;
        for i in 1..=n {
            let parent = i + lowbit(i);
            if parent <= n {
                tree[parent] = tree[parent].clone() + tree[i].clone();
            }
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(len = n, "built Fenwick tree");
        tree
    }

    pub fn len(&self) -> usize {
        self.tree.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `min <= index <= self.len()`を検査する。
    fn check_index(&self, index: usize, min: usize) -> Result<()> {
        if index < min || index > self.len() {
            Err(Error::OutOfRange {
                index,
                len: self.len(),
            })
        } else {
            Ok(())
        }
    }

    /// `i`番目の要素に`delta`をO(log(n))で加える。
    ///
    /// # Errors
    /// `i`が`[1, self.len()]`の外にあるとき。
    pub fn update(&mut self, i: usize, delta: T) -> Result<()> {
        self.check_index(i, 1)?;
        self.add(i, delta);
        Ok(())
    }

    /// 範囲検査をしない`update`。`i > self.len()`のときは何もしない。
    pub(crate) fn add(&mut self, mut i: usize, delta: T) {
        debug_assert_ne!(i, 0);
        while i < self.tree.len() {
            self.tree[i] = self.tree[i].clone() + delta.clone();
            i += lowbit(i);
        }
    }

    /// 区間`[1, j]`の和をO(log(n))で求める。`j == 0`なら`0`を返す。
    ///
    /// # Errors
    /// `j > self.len()`のとき。
    pub fn prefix_query(&self, j: usize) -> Result<T> {
        self.check_index(j, 0)?;
        Ok(self.prefix(j))
    }

    pub(crate) fn prefix(&self, mut j: usize) -> T {
        let mut sum = T::IDENT;
        while j > 0 {
            sum = sum + self.tree[j].clone();
            j -= lowbit(j);
        }
        sum
    }

    /// 区間`[i, j]`の和をO(log(n))で求める。`i > j`のときは空区間として`0`を返す。
    ///
    /// # Errors
    /// `i`または`j`が`[1, self.len()]`の外にあるとき。
    pub fn range_query(&self, i: usize, j: usize) -> Result<T> {
        self.check_index(i, 1)?;
        self.check_index(j, 1)?;
        if i > j {
            return Ok(T::IDENT);
        }
        Ok(self.prefix(j) - self.prefix(i - 1))
    }

    /// `i`番目の要素の値。
    pub fn get(&self, i: usize) -> Result<T> {
        self.range_query(i, i)
    }

    /// 全要素の和。
    pub fn total(&self) -> T {
        self.prefix(self.len())
    }

    /// `self.prefix_query(p) >= k`となる最小の`p`をO(log(n))で求める。
    ///
    /// 木の暗黙の構造を上位ビットから降りていくため、`prefix_query`を使った二分探索より速い。
    /// そのような`p`が存在しないときは`None`を返す。
    ///
    /// # Note
    /// 全要素が非負であることを仮定している。負の要素があるときの戻り値は意味を持たないが、パニックはしない。
    pub fn rank_search(&self, k: T) -> Option<usize>
    where
        T: PartialOrd,
    {
        let n = self.len();
        if n == 0 {
            return None;
        }
        let mut pos = 0;
        let mut sum = T::IDENT;
        let mut bit = 1usize << n.ilog2();
        while bit > 0 {
            let next = pos + bit;
            if next <= n {
                let next_sum = sum.clone() + self.tree[next].clone();
                if next_sum < k {
                    sum = next_sum;
                    pos = next;
                }
            }
            bit >>= 1;
        }
        (pos < n).then_some(pos + 1)
    }

    /// 各要素の値をO(n)で復元する。
    pub fn to_vec(&self) -> Vec<T> {
        let mut values = self.tree.to_vec();
        let n = self.len();
        for i in (1..=n).rev() {
            let parent = i + lowbit(i);
            if parent <= n {
                values[parent] = values[parent].clone() - values[i].clone();
            }
        }
        values.remove(0);
        values
    }
}

impl<T: Element> FromIterator<T> for FenwickTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            tree: Self::build(iter),
        }
    }
}
