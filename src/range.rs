use crate::{
    error::{Error, Result},
    num::{Element, Times},
    FenwickTree,
};

/// 区間加算・一点取得のFenwick木。
///
/// 差分列をFenwick木で持ち、`i`番目の値を差分列の`[1, i]`の和として求める。
///
/// # Note
/// 更新のたびに`0 - delta`を足すため、符号なし整数では`std::num::Wrapping`を使う。
#[derive(Clone, Debug)]
pub struct Rupq<T> {
    /// 長さ`n + 1`。末尾の余分な要素は`hi == n`の区間更新の打ち消しを受け止める。
    diff: FenwickTree<T>,
}

impl<T: Element> Rupq<T> {
    /// 全要素が`0`の長さ`n`の木を構築する。
    pub fn new(n: usize) -> Self {
        Self {
            diff: FenwickTree::new(n + 1),
        }
    }

    pub fn len(&self) -> usize {
        self.diff.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `[lo, hi]`の各要素に`delta`をO(log(n))で加える。
    ///
    /// # Errors
    /// `lo > hi`のときは`Error::MalformedRange`、端点が`[1, self.len()]`の外にあるときは`Error::OutOfRange`。
    pub fn range_update(&mut self, lo: usize, hi: usize, delta: T) -> Result<()> {
        check_range(lo, hi, self.len())?;
        self.diff.add(lo, delta.clone());
        self.diff.add(hi + 1, T::IDENT - delta);
        Ok(())
    }

    /// `i`番目の要素の値をO(log(n))で求める。
    ///
    /// # Errors
    /// `i`が`[1, self.len()]`の外にあるとき。
    pub fn point_query(&self, i: usize) -> Result<T> {
        if i == 0 || i > self.len() {
            return Err(Error::OutOfRange {
                index: i,
                len: self.len(),
            });
        }
        Ok(self.diff.prefix(i))
    }
}

/// 区間加算・区間和のFenwick木。
///
/// 区間`[lo, hi]`に`v`を加えたとき、位置`j`までの和は
///
/// * `j < lo`なら`0`
/// * `lo <= j <= hi`なら`v * j - v * (lo - 1)`
/// * `hi < j`なら`v * j - v * (lo - 1) - (v * j - v * hi)`、つまり`v * (hi - lo + 1)`
///
/// となる。第1項を`Rupq`の一点取得と`j`の積で、残りを補正用のFenwick木の接頭辞和で表す。
#[derive(Clone, Debug)]
pub struct Rurq<T> {
    rupq: Rupq<T>,
    correction: FenwickTree<T>,
}

impl<T: Element + Times> Rurq<T> {
    /// 全要素が`0`の長さ`n`の木を構築する。
    pub fn new(n: usize) -> Self {
        Self {
            rupq: Rupq::new(n),
            correction: FenwickTree::new(n),
        }
    }

    pub fn len(&self) -> usize {
        self.correction.len()
    }

    pub fn is_empty(&self) -> bool {
        self.correction.is_empty()
    }

    /// `[lo, hi]`の各要素に`delta`をO(log(n))で加える。
    ///
    /// # Errors
    /// `Rupq::range_update`と同じ。
    pub fn range_update(&mut self, lo: usize, hi: usize, delta: T) -> Result<()> {
        self.rupq.range_update(lo, hi, delta.clone())?;
        self.correction.add(lo, delta.times(lo - 1));
        // hi == nのときは何もしない
        self.correction.add(hi + 1, T::IDENT - delta.times(hi));
        Ok(())
    }

    /// 区間`[1, j]`の和をO(log(n))で求める。`j == 0`なら`0`を返す。
    ///
    /// # Errors
    /// `j > self.len()`のとき。
    pub fn prefix_query(&self, j: usize) -> Result<T> {
        if j > self.len() {
            return Err(Error::OutOfRange {
                index: j,
                len: self.len(),
            });
        }
        Ok(self.prefix(j))
    }

    fn prefix(&self, j: usize) -> T {
        if j == 0 {
            return T::IDENT;
        }
        self.rupq.diff.prefix(j).times(j) - self.correction.prefix(j)
    }

    /// 区間`[i, j]`の和をO(log(n))で求める。`i > j`のときは空区間として`0`を返す。
    ///
    /// # Errors
    /// `i`または`j`が`[1, self.len()]`の外にあるとき。
    pub fn range_query(&self, i: usize, j: usize) -> Result<T> {
        for index in [i, j] {
            if index == 0 || index > self.len() {
                return Err(Error::OutOfRange {
                    index,
                    len: self.len(),
                });
            }
        }
        if i > j {
            return Ok(T::IDENT);
        }
        Ok(self.prefix(j) - self.prefix(i - 1))
    }
}

/// 区間更新の引数を検査する。
fn check_range(lo: usize, hi: usize, len: usize) -> Result<()> {
    if lo > hi {
        return Err(Error::MalformedRange { lo, hi });
    }
    if lo == 0 {
        return Err(Error::OutOfRange { index: lo, len });
    }
    if hi > len {
        return Err(Error::OutOfRange { index: hi, len });
    }
    Ok(())
}
