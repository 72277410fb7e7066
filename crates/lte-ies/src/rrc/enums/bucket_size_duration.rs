/// TS 36.331 6.3.2 LogicalChannelConfig bucketSizeDuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum BucketSizeDuration {
    Ms50 = 0,
    Ms100 = 1,
    Ms150 = 2,
    Ms300 = 3,
    Ms500 = 4,
    Ms1000 = 5,
}

impl std::convert::TryFrom<u64> for BucketSizeDuration {
    type Error = ();
    fn try_from(x: u64) -> Result<Self, Self::Error> {
        match x {
            0 => Ok(BucketSizeDuration::Ms50),
            1 => Ok(BucketSizeDuration::Ms100),
            2 => Ok(BucketSizeDuration::Ms150),
            3 => Ok(BucketSizeDuration::Ms300),
            4 => Ok(BucketSizeDuration::Ms500),
            5 => Ok(BucketSizeDuration::Ms1000),
            _ => Err(()),
        }
    }
}

impl BucketSizeDuration {
    /// Convert this enum back into the raw ASN.1 enumerated index
    pub fn into_raw(self) -> u64 {
        self as u64
    }

    /// Duration in ms
    pub fn to_number(self) -> i32 {
        match self {
            BucketSizeDuration::Ms50 => 50,
            BucketSizeDuration::Ms100 => 100,
            BucketSizeDuration::Ms150 => 150,
            BucketSizeDuration::Ms300 => 300,
            BucketSizeDuration::Ms500 => 500,
            BucketSizeDuration::Ms1000 => 1000,
        }
    }
}

impl core::fmt::Display for BucketSizeDuration {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "ms{}", self.to_number())
    }
}
