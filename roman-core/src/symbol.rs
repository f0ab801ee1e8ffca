//! 罗马数字符号表
//!
//! 七个符号及其数值在编译期固定，进程内只读共享，无需加锁。

/// 罗马数字符号
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    I,
    V,
    X,
    L,
    C,
    D,
    M,
}

/// 符号表：(字符, 符号, 数值)，按数值升序
pub const SYMBOL_TABLE: [(char, Symbol, u64); 7] = [
    ('I', Symbol::I, 1),
    ('V', Symbol::V, 5),
    ('X', Symbol::X, 10),
    ('L', Symbol::L, 50),
    ('C', Symbol::C, 100),
    ('D', Symbol::D, 500),
    ('M', Symbol::M, 1000),
];

impl Symbol {
    /// 全部符号，按数值升序
    pub const ALL: [Symbol; 7] = [
        Symbol::I,
        Symbol::V,
        Symbol::X,
        Symbol::L,
        Symbol::C,
        Symbol::D,
        Symbol::M,
    ];

    /// 查找大写字符对应的符号
    ///
    /// 只接受大写形式；大小写归一化由调用方完成。
    pub fn from_char(c: char) -> Option<Symbol> {
        match c {
            'I' => Some(Symbol::I),
            'V' => Some(Symbol::V),
            'X' => Some(Symbol::X),
            'L' => Some(Symbol::L),
            'C' => Some(Symbol::C),
            'D' => Some(Symbol::D),
            'M' => Some(Symbol::M),
            _ => None,
        }
    }

    /// 符号的十进制数值
    pub const fn value(self) -> u64 {
        match self {
            Symbol::I => 1,
            Symbol::V => 5,
            Symbol::X => 10,
            Symbol::L => 50,
            Symbol::C => 100,
            Symbol::D => 500,
            Symbol::M => 1000,
        }
    }

    pub const fn as_char(self) -> char {
        match self {
            Symbol::I => 'I',
            Symbol::V => 'V',
            Symbol::X => 'X',
            Symbol::L => 'L',
            Symbol::C => 'C',
            Symbol::D => 'D',
            Symbol::M => 'M',
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// 查找字符的数值（大写字符）
pub fn value_of(c: char) -> Option<u64> {
    Symbol::from_char(c).map(Symbol::value)
}
