use clap::ValueEnum;

/// ASCII encoding used for corpus filenames.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Scheme {
    /// Tone and shape digits, e.g. "cá" -> "ca1".
    #[default]
    Vni,
    /// Letter sequences, e.g. "cá" -> "cas". Collides with plain words ("công" and "coong").
    Telex,
}

const VNI: &[(char, &str)] = &[
    ('á', "a1"), ('à', "a2"), ('ả', "a3"), ('ã', "a4"), ('ạ', "a5"),
    ('ă', "a8"), ('ắ', "a81"), ('ằ', "a82"), ('ẳ', "a83"), ('ẵ', "a84"), ('ặ', "a85"),
    ('â', "a6"), ('ấ', "a61"), ('ầ', "a62"), ('ẩ', "a63"), ('ẫ', "a64"), ('ậ', "a65"),
    ('é', "e1"), ('è', "e2"), ('ẻ', "e3"), ('ẽ', "e4"), ('ẹ', "e5"),
    ('ê', "e6"), ('ế', "e61"), ('ề', "e62"), ('ể', "e63"), ('ễ', "e64"), ('ệ', "e65"),
    ('í', "i1"), ('ì', "i2"), ('ỉ', "i3"), ('ĩ', "i4"), ('ị', "i5"),
    ('ó', "o1"), ('ò', "o2"), ('ỏ', "o3"), ('õ', "o4"), ('ọ', "o5"),
    ('ô', "o6"), ('ố', "o61"), ('ồ', "o62"), ('ổ', "o63"), ('ỗ', "o64"), ('ộ', "o65"),
    ('ơ', "o7"), ('ớ', "o71"), ('ờ', "o72"), ('ở', "o73"), ('ỡ', "o74"), ('ợ', "o75"),
    ('ú', "u1"), ('ù', "u2"), ('ủ', "u3"), ('ũ', "u4"), ('ụ', "u5"),
    ('ư', "u7"), ('ứ', "u71"), ('ừ', "u72"), ('ử', "u73"), ('ữ', "u74"), ('ự', "u75"),
    ('ý', "y1"), ('ỳ', "y2"), ('ỷ', "y3"), ('ỹ', "y4"), ('ỵ', "y5"),
    ('đ', "d9"),
];

const TELEX: &[(char, &str)] = &[
    ('á', "as"), ('à', "af"), ('ả', "ar"), ('ã', "ax"), ('ạ', "aj"),
    ('ă', "aw"), ('ắ', "aws"), ('ằ', "awf"), ('ẳ', "awr"), ('ẵ', "awx"), ('ặ', "awj"),
    ('â', "aa"), ('ấ', "aas"), ('ầ', "aaf"), ('ẩ', "aar"), ('ẫ', "aax"), ('ậ', "aaj"),
    ('é', "es"), ('è', "ef"), ('ẻ', "er"), ('ẽ', "ex"), ('ẹ', "ej"),
    ('ê', "ee"), ('ế', "ees"), ('ề', "eef"), ('ể', "eer"), ('ễ', "eex"), ('ệ', "eej"),
    ('í', "is"), ('ì', "if"), ('ỉ', "ir"), ('ĩ', "ix"), ('ị', "ij"),
    ('ó', "os"), ('ò', "of"), ('ỏ', "or"), ('õ', "ox"), ('ọ', "oj"),
    ('ô', "oo"), ('ố', "oos"), ('ồ', "oof"), ('ổ', "oor"), ('ỗ', "oox"), ('ộ', "ooj"),
    ('ơ', "ow"), ('ớ', "ows"), ('ờ', "owf"), ('ở', "owr"), ('ỡ', "owx"), ('ợ', "owj"),
    ('ú', "us"), ('ù', "uf"), ('ủ', "ur"), ('ũ', "ux"), ('ụ', "uj"),
    ('ư', "uw"), ('ứ', "uws"), ('ừ', "uwf"), ('ử', "uwr"), ('ữ', "uwx"), ('ự', "uwj"),
    ('ý', "ys"), ('ỳ', "yf"), ('ỷ', "yr"), ('ỹ', "yx"), ('ỵ', "yj"),
    ('đ', "dd"),
];

impl Scheme {
    fn table(self) -> &'static [(char, &'static str)] {
        match self {
            Scheme::Vni => VNI,
            Scheme::Telex => TELEX,
        }
    }

    fn code(self, c: char) -> Option<&'static str> {
        self.table()
            .iter()
            .find(|(letter, _)| *letter == c)
            .map(|(_, code)| *code)
    }
}

/// Replaces every precomposed lowercase Vietnamese letter with its ASCII code.
/// Characters outside the table (ASCII, uppercase, combining marks) pass through.
pub fn transliterate(text: &str, scheme: Scheme) -> String {
    text.chars().fold(String::with_capacity(text.len()), |mut out, c| {
        match scheme.code(c) {
            Some(code) => out.push_str(code),
            None => out.push(c),
        }
        out
    })
}
