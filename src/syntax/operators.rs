use phf::phf_map;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Operator {
    pub sym: char,
    pub prec: u8,
}
impl Operator {
    /// Whether `self`, sitting on top of the operator stack, has to be applied
    /// before `incoming` is pushed. Every operator is left associative, so
    /// equal precedence reduces too.
    pub fn has_bigger_prec(&self, incoming: &Operator) -> bool {
        self.prec >= incoming.prec
    }
}

// `^` is left associative too: 2^3^2 is (2^3)^2.
pub static OPERATOR_TABLE: phf::Map<char, Operator> = phf_map! {
    '+' => Operator { prec: 1, sym: '+' },
    '-' => Operator { prec: 1, sym: '-' },
    '*' => Operator { prec: 2, sym: '*' },
    '/' => Operator { prec: 2, sym: '/' },
    '^' => Operator { prec: 3, sym: '^' },
};
