/** sum of the proper divisors of n (the divisors smaller than n). divisor_sum(1) = 0 */
pub fn divisor_sum(n:u64) -> u64 {
    if n <= 1 { return 0; }
    let mut sum = 1;
    let mut i = 2;
    while i <= n/i {
        if n % i == 0 {
            sum += i;
            if i != n/i { sum += n/i; }
        }
        i += 1;
    }
    sum
}
