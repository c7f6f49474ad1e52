use algo::rle;

const GLIDER: &str = "x = 8, y = 8, rule = B3/S23\nbo$2bo$3o!\n";

#[test]
fn multi_simulate() {
  let glider_1 = "x = 8, y = 8, rule = B3/S23\n$obo$b2o$bo!\n";
  let glider_4 = "x = 8, y = 8, rule = B3/S23\n$2bo$3bo$b3o!\n";
  let mut uni = rle::read(GLIDER).unwrap().into_universe().unwrap();

  uni.simulate(1);

  let actual = rle::write(&uni);

  assert_eq!(glider_1, &actual);

  uni.simulate(3);

  let actual = rle::write(&uni);

  assert_eq!(glider_4, &actual);
}

#[test]
fn glider_settles_in_corner() {
  let mut uni = rle::read(GLIDER).unwrap().into_universe().unwrap();

  uni.simulate(1000);

  assert!(uni.is_stable());
  assert!(uni.generation() > 4);
}
