//! Built-in problem bank and the immutable catalog built from it.
//!
//! The catalog is constructed once at startup (optionally merged with a TOML
//! bank, see `config.rs`) and never mutated afterwards, so it is shared as a
//! plain `Arc` with no locking. Lookups never fail hard: unknown ids fall
//! back to the first problem of the first chapter, unknown chapters yield an
//! empty slice.

use std::collections::HashMap;

use tracing::{error, info};

use crate::domain::{Chapter, Difficulty, Example, Language, LanguageData, Problem, TestCase};

pub struct Catalog {
  languages: Vec<LanguageData>,
  // id -> (language idx, chapter idx, position within chapter)
  index: HashMap<String, (usize, usize, usize)>,
}

impl Catalog {
  /// Catalog with only the built-in bank.
  pub fn built_in() -> Self {
    Self::build(built_in_problems())
  }

  /// Built-in bank plus extra problems (from the TOML config). Extras that
  /// collide with an existing id are skipped, not overwritten.
  pub fn with_extras(extras: Vec<Problem>) -> Self {
    let mut problems = built_in_problems();
    problems.extend(extras);
    Self::build(problems)
  }

  /// Group problems into chapters per language and build the id index.
  /// Invalid entries (duplicate id, no test cases, unknown chapter) are
  /// logged and skipped so one bad bank entry never poisons the catalog.
  fn build(problems: Vec<Problem>) -> Self {
    let mut languages: Vec<LanguageData> = [Language::Javascript, Language::Python]
      .into_iter()
      .map(|lang| LanguageData {
        id: lang,
        name: lang.display_name().to_string(),
        icon: lang.icon().to_string(),
        chapters: chapter_defs(lang)
          .iter()
          .map(|(id, title, description, icon)| Chapter {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            problems: Vec::new(),
          })
          .collect(),
      })
      .collect();

    let mut index = HashMap::new();
    for p in problems {
      if index.contains_key(&p.id) {
        error!(target: "catalog", id = %p.id, "Skipping problem: duplicate id");
        continue;
      }
      if p.test_cases.is_empty() {
        error!(target: "catalog", id = %p.id, "Skipping problem: no test cases");
        continue;
      }
      let li = match p.language {
        Language::Javascript => 0,
        Language::Python => 1,
      };
      let Some(ci) = languages[li].chapters.iter().position(|c| c.id == p.chapter) else {
        error!(target: "catalog", id = %p.id, chapter = %p.chapter, "Skipping problem: unknown chapter");
        continue;
      };
      let chapter = &mut languages[li].chapters[ci];
      index.insert(p.id.clone(), (li, ci, chapter.problems.len()));
      chapter.problems.push(p);
    }

    let catalog = Self { languages, index };
    info!(target: "catalog", problems = catalog.total_problems(), "Catalog built");
    catalog
  }

  pub fn languages(&self) -> &[LanguageData] {
    &self.languages
  }

  /// All problems, JavaScript track first, in chapter order.
  pub fn all_problems(&self) -> impl Iterator<Item = &Problem> {
    self
      .languages
      .iter()
      .flat_map(|l| l.chapters.iter())
      .flat_map(|c| c.problems.iter())
  }

  pub fn total_problems(&self) -> usize {
    self.index.len()
  }

  pub fn problem_by_id(&self, id: &str) -> Option<&Problem> {
    let (li, ci, pi) = *self.index.get(id)?;
    Some(&self.languages[li].chapters[ci].problems[pi])
  }

  /// Problems of one chapter; empty for an unknown language/chapter pair.
  pub fn chapter_problems(&self, language: Language, chapter_id: &str) -> &[Problem] {
    self
      .languages
      .iter()
      .find(|l| l.id == language)
      .and_then(|l| l.chapters.iter().find(|c| c.id == chapter_id))
      .map(|c| c.problems.as_slice())
      .unwrap_or(&[])
  }

  /// First problem of the first non-empty chapter. `None` only when the
  /// whole catalog is empty.
  pub fn first_problem(&self) -> Option<&Problem> {
    self.all_problems().next()
  }

  /// Selection fallback chain: the requested problem if it exists, else the
  /// first problem of the catalog.
  pub fn resolve(&self, id: Option<&str>) -> Option<&Problem> {
    id.and_then(|id| self.problem_by_id(id))
      .or_else(|| self.first_problem())
  }
}

fn chapter_defs(lang: Language) -> &'static [(&'static str, &'static str, &'static str, &'static str)] {
  match lang {
    Language::Javascript => &[
      ("variables", "Variables & Basics", "Learn the fundamentals of JavaScript variables and data types", "📦"),
      ("loops", "Loops & Iteration", "Master for loops, while loops, and iteration patterns", "🔄"),
      ("arrays", "Arrays", "Work with arrays and array methods", "📚"),
      ("functions", "Functions", "Understand functions, closures, and recursion", "⚡"),
      ("strings", "Strings", "String manipulation and pattern matching", "🔤"),
      ("data-structures", "Data Structures", "Objects, Maps, Sets, and complex data handling", "🏗️"),
    ],
    Language::Python => &[
      ("variables", "Variables & Basics", "Learn Python variables and data types", "📦"),
      ("loops", "Loops & Iteration", "Master for and while loops in Python", "🔄"),
      ("lists", "Lists", "Work with Python lists and comprehensions", "📚"),
      ("functions", "Functions", "Functions, decorators, and generators", "⚡"),
      ("strings", "Strings", "String manipulation and formatting", "🔤"),
      ("data-structures", "Data Structures", "Dictionaries, sets, and tuples", "🏗️"),
    ],
  }
}

// -------- Built-in bank --------

fn tc(id: &str, input: &str, expected: &str) -> TestCase {
  TestCase { id: id.into(), input: input.into(), expected_output: expected.into(), is_hidden: false }
}

fn tch(id: &str, input: &str, expected: &str) -> TestCase {
  TestCase { id: id.into(), input: input.into(), expected_output: expected.into(), is_hidden: true }
}

fn ex(input: &str, output: &str) -> Example {
  Example { input: input.into(), output: output.into(), explanation: None }
}

fn exp(input: &str, output: &str, explanation: &str) -> Example {
  Example { input: input.into(), output: output.into(), explanation: Some(explanation.into()) }
}

fn built_in_problems() -> Vec<Problem> {
  let mut all = js_problems();
  all.extend(py_problems());
  all
}

fn js_problems() -> Vec<Problem> {
  vec![
    Problem {
      id: "js-var-1".into(),
      title: "Hello World".into(),
      description: r#"# Hello World

Write a function that returns the string "Hello, World!".

This is the classic first program that every programmer writes. It introduces you to the basic syntax of JavaScript functions.

## Task
Complete the function `helloWorld` that returns the greeting string."#.into(),
      input_format: "No input required".into(),
      output_format: "A string: \"Hello, World!\"".into(),
      examples: vec![exp("None", "\"Hello, World!\"", "The function simply returns the greeting string.")],
      difficulty: Difficulty::Easy,
      tags: vec!["basics".into(), "strings".into()],
      language: Language::Javascript,
      chapter: "variables".into(),
      starter_code: "function helloWorld() {\n  // Write your code here\n  \n}\n\n// Do not modify below this line\nconsole.log(helloWorld());".into(),
      test_cases: vec![tc("t1", "", "Hello, World!")],
    },
    Problem {
      id: "js-var-2".into(),
      title: "Sum Two Numbers".into(),
      description: r#"# Sum Two Numbers

Write a function that takes two numbers as arguments and returns their sum.

## Task
Complete the function `sum` that accepts two parameters and returns their addition."#.into(),
      input_format: "Two integers a and b".into(),
      output_format: "An integer representing the sum of a and b".into(),
      examples: vec![exp("sum(2, 3)", "5", "2 + 3 = 5"), exp("sum(-1, 1)", "0", "-1 + 1 = 0")],
      difficulty: Difficulty::Easy,
      tags: vec!["basics".into(), "math".into()],
      language: Language::Javascript,
      chapter: "variables".into(),
      starter_code: "function sum(a, b) {\n  // Write your code here\n  \n}\n\n// Test cases\nconsole.log(sum(2, 3));\nconsole.log(sum(-1, 1));\nconsole.log(sum(100, 200));".into(),
      test_cases: vec![tc("t1", "2, 3", "5"), tc("t2", "-1, 1", "0"), tch("t3", "100, 200", "300")],
    },
    Problem {
      id: "js-var-3".into(),
      title: "Variable Swap".into(),
      description: r#"# Variable Swap

Write a function that swaps the values of two variables and returns them as an array.

## Task
Complete the function `swap` that takes two values and returns them in reversed order as an array [b, a]."#.into(),
      input_format: "Two values a and b".into(),
      output_format: "An array with values swapped [b, a]".into(),
      examples: vec![ex("swap(1, 2)", "[2, 1]"), ex("swap(\"hello\", \"world\")", "[\"world\", \"hello\"]")],
      difficulty: Difficulty::Easy,
      tags: vec!["basics".into(), "arrays".into()],
      language: Language::Javascript,
      chapter: "variables".into(),
      starter_code: "function swap(a, b) {\n  // Write your code here\n  \n}\n\nconsole.log(swap(1, 2));\nconsole.log(swap(\"hello\", \"world\"));".into(),
      test_cases: vec![tc("t1", "1, 2", "[2, 1]"), tch("t2", "\"hello\", \"world\"", "[\"world\", \"hello\"]")],
    },
    Problem {
      id: "js-loop-1".into(),
      title: "Count to N".into(),
      description: r#"# Count to N

Write a function that prints numbers from 1 to n, each on a new line.

## Task
Complete the function `countToN` that takes a number n and logs each number from 1 to n."#.into(),
      input_format: "A positive integer n".into(),
      output_format: "Numbers from 1 to n, each on a new line".into(),
      examples: vec![ex("countToN(5)", "1\n2\n3\n4\n5")],
      difficulty: Difficulty::Easy,
      tags: vec!["loops".into(), "basics".into()],
      language: Language::Javascript,
      chapter: "loops".into(),
      starter_code: "function countToN(n) {\n  // Write your code here\n  \n}\n\ncountToN(5);".into(),
      test_cases: vec![tc("t1", "5", "1\n2\n3\n4\n5"), tch("t2", "3", "1\n2\n3")],
    },
    Problem {
      id: "js-loop-2".into(),
      title: "Sum of Array".into(),
      description: r#"# Sum of Array

Write a function that calculates the sum of all numbers in an array.

## Task
Complete the function `sumArray` that takes an array of numbers and returns their total."#.into(),
      input_format: "An array of integers".into(),
      output_format: "The sum of all integers in the array".into(),
      examples: vec![ex("sumArray([1, 2, 3, 4, 5])", "15"), ex("sumArray([-1, 0, 1])", "0")],
      difficulty: Difficulty::Easy,
      tags: vec!["loops".into(), "arrays".into()],
      language: Language::Javascript,
      chapter: "loops".into(),
      starter_code: "function sumArray(arr) {\n  // Write your code here\n  \n}\n\nconsole.log(sumArray([1, 2, 3, 4, 5]));\nconsole.log(sumArray([-1, 0, 1]));".into(),
      test_cases: vec![tc("t1", "[1, 2, 3, 4, 5]", "15"), tc("t2", "[-1, 0, 1]", "0"), tch("t3", "[100, 200, 300]", "600")],
    },
    Problem {
      id: "js-loop-3".into(),
      title: "FizzBuzz".into(),
      description: r#"# FizzBuzz

Write a function that prints numbers from 1 to n. For multiples of 3, print "Fizz". For multiples of 5, print "Buzz". For multiples of both, print "FizzBuzz".

## Task
Complete the classic FizzBuzz challenge!"#.into(),
      input_format: "A positive integer n".into(),
      output_format: "Numbers or Fizz/Buzz/FizzBuzz from 1 to n".into(),
      examples: vec![ex("fizzBuzz(15)", "1\n2\nFizz\n4\nBuzz\nFizz\n7\n8\nFizz\nBuzz\n11\nFizz\n13\n14\nFizzBuzz")],
      difficulty: Difficulty::Easy,
      tags: vec!["loops".into(), "conditionals".into()],
      language: Language::Javascript,
      chapter: "loops".into(),
      starter_code: "function fizzBuzz(n) {\n  // Write your code here\n  \n}\n\nfizzBuzz(15);".into(),
      test_cases: vec![
        tc("t1", "15", "1\n2\nFizz\n4\nBuzz\nFizz\n7\n8\nFizz\nBuzz\n11\nFizz\n13\n14\nFizzBuzz"),
        tch("t2", "5", "1\n2\nFizz\n4\nBuzz"),
      ],
    },
    Problem {
      id: "js-arr-1".into(),
      title: "Find Maximum".into(),
      description: r#"# Find Maximum

Write a function that finds the largest number in an array.

## Task
Complete the function `findMax` that returns the maximum value from an array of numbers."#.into(),
      input_format: "An array of integers".into(),
      output_format: "The largest integer in the array".into(),
      examples: vec![ex("findMax([1, 5, 3, 9, 2])", "9"), ex("findMax([-5, -1, -10])", "-1")],
      difficulty: Difficulty::Easy,
      tags: vec!["arrays".into(), "searching".into()],
      language: Language::Javascript,
      chapter: "arrays".into(),
      starter_code: "function findMax(arr) {\n  // Write your code here\n  \n}\n\nconsole.log(findMax([1, 5, 3, 9, 2]));\nconsole.log(findMax([-5, -1, -10]));".into(),
      test_cases: vec![tc("t1", "[1, 5, 3, 9, 2]", "9"), tch("t2", "[-5, -1, -10]", "-1")],
    },
    Problem {
      id: "js-arr-2".into(),
      title: "Reverse Array".into(),
      description: r#"# Reverse Array

Write a function that reverses an array without using the built-in reverse method.

## Task
Complete the function `reverseArray` that returns a new array with elements in reverse order."#.into(),
      input_format: "An array of any type".into(),
      output_format: "A new array with elements reversed".into(),
      examples: vec![ex("reverseArray([1, 2, 3, 4, 5])", "[5, 4, 3, 2, 1]")],
      difficulty: Difficulty::Easy,
      tags: vec!["arrays".into(), "manipulation".into()],
      language: Language::Javascript,
      chapter: "arrays".into(),
      starter_code: "function reverseArray(arr) {\n  // Write your code here - don't use .reverse()!\n  \n}\n\nconsole.log(reverseArray([1, 2, 3, 4, 5]));".into(),
      test_cases: vec![tc("t1", "[1, 2, 3, 4, 5]", "[5, 4, 3, 2, 1]"), tch("t2", "[\"a\", \"b\", \"c\"]", "[\"c\", \"b\", \"a\"]")],
    },
    Problem {
      id: "js-func-1".into(),
      title: "Factorial".into(),
      description: r#"# Factorial

Write a function that calculates the factorial of a number. The factorial of n (written as n!) is the product of all positive integers less than or equal to n.

## Task
Complete the function `factorial` using recursion or loops."#.into(),
      input_format: "A non-negative integer n".into(),
      output_format: "The factorial of n".into(),
      examples: vec![
        exp("factorial(5)", "120", "5! = 5 × 4 × 3 × 2 × 1 = 120"),
        exp("factorial(0)", "1", "0! = 1 by definition"),
      ],
      difficulty: Difficulty::Medium,
      tags: vec!["functions".into(), "recursion".into(), "math".into()],
      language: Language::Javascript,
      chapter: "functions".into(),
      starter_code: "function factorial(n) {\n  // Write your code here\n  \n}\n\nconsole.log(factorial(5));\nconsole.log(factorial(0));".into(),
      test_cases: vec![tc("t1", "5", "120"), tc("t2", "0", "1"), tch("t3", "10", "3628800")],
    },
    Problem {
      id: "js-func-2".into(),
      title: "Fibonacci".into(),
      description: r#"# Fibonacci

Write a function that returns the nth Fibonacci number. The Fibonacci sequence is: 0, 1, 1, 2, 3, 5, 8, 13, 21...

## Task
Complete the function `fibonacci` that returns the nth number in the sequence (0-indexed)."#.into(),
      input_format: "A non-negative integer n".into(),
      output_format: "The nth Fibonacci number".into(),
      examples: vec![ex("fibonacci(0)", "0"), ex("fibonacci(6)", "8")],
      difficulty: Difficulty::Medium,
      tags: vec!["functions".into(), "recursion".into(), "math".into()],
      language: Language::Javascript,
      chapter: "functions".into(),
      starter_code: "function fibonacci(n) {\n  // Write your code here\n  \n}\n\nconsole.log(fibonacci(0));\nconsole.log(fibonacci(6));\nconsole.log(fibonacci(10));".into(),
      test_cases: vec![tc("t1", "0", "0"), tc("t2", "6", "8"), tch("t3", "10", "55")],
    },
    Problem {
      id: "js-str-1".into(),
      title: "Palindrome Check".into(),
      description: r#"# Palindrome Check

Write a function that checks if a string is a palindrome (reads the same forwards and backwards).

## Task
Complete the function `isPalindrome` that returns true if the string is a palindrome, false otherwise. Ignore case and spaces."#.into(),
      input_format: "A string".into(),
      output_format: "Boolean (true or false)".into(),
      examples: vec![ex("isPalindrome(\"racecar\")", "true"), ex("isPalindrome(\"hello\")", "false")],
      difficulty: Difficulty::Easy,
      tags: vec!["strings".into(), "manipulation".into()],
      language: Language::Javascript,
      chapter: "strings".into(),
      starter_code: "function isPalindrome(str) {\n  // Write your code here\n  \n}\n\nconsole.log(isPalindrome(\"racecar\"));\nconsole.log(isPalindrome(\"hello\"));\nconsole.log(isPalindrome(\"A man a plan a canal Panama\"));".into(),
      test_cases: vec![
        tc("t1", "\"racecar\"", "true"),
        tc("t2", "\"hello\"", "false"),
        tch("t3", "\"A man a plan a canal Panama\"", "true"),
      ],
    },
    Problem {
      id: "js-str-2".into(),
      title: "Count Vowels".into(),
      description: r#"# Count Vowels

Write a function that counts the number of vowels (a, e, i, o, u) in a string.

## Task
Complete the function `countVowels` that returns the count of vowels. Case-insensitive."#.into(),
      input_format: "A string".into(),
      output_format: "Integer count of vowels".into(),
      examples: vec![ex("countVowels(\"Hello World\")", "3")],
      difficulty: Difficulty::Easy,
      tags: vec!["strings".into(), "counting".into()],
      language: Language::Javascript,
      chapter: "strings".into(),
      starter_code: "function countVowels(str) {\n  // Write your code here\n  \n}\n\nconsole.log(countVowels(\"Hello World\"));\nconsole.log(countVowels(\"AEIOU\"));".into(),
      test_cases: vec![tc("t1", "\"Hello World\"", "3"), tch("t2", "\"AEIOU\"", "5")],
    },
    Problem {
      id: "js-ds-1".into(),
      title: "Two Sum".into(),
      description: r#"# Two Sum

Given an array of integers and a target sum, return the indices of two numbers that add up to the target.

## Task
Complete the function `twoSum` that returns an array of two indices. Assume exactly one solution exists."#.into(),
      input_format: "An array of integers and a target integer".into(),
      output_format: "Array of two indices [i, j]".into(),
      examples: vec![exp("twoSum([2, 7, 11, 15], 9)", "[0, 1]", "Because nums[0] + nums[1] = 2 + 7 = 9")],
      difficulty: Difficulty::Medium,
      tags: vec!["arrays".into(), "hash-map".into(), "searching".into()],
      language: Language::Javascript,
      chapter: "data-structures".into(),
      starter_code: "function twoSum(nums, target) {\n  // Write your code here\n  \n}\n\nconsole.log(twoSum([2, 7, 11, 15], 9));\nconsole.log(twoSum([3, 2, 4], 6));".into(),
      test_cases: vec![tc("t1", "[2, 7, 11, 15], 9", "[0, 1]"), tch("t2", "[3, 2, 4], 6", "[1, 2]")],
    },
  ]
}

fn py_problems() -> Vec<Problem> {
  vec![
    Problem {
      id: "py-var-1".into(),
      title: "Hello World".into(),
      description: r#"# Hello World

Write a function that prints "Hello, World!".

This is the classic first program that every programmer writes. It introduces you to the basic syntax of Python functions.

## Task
Complete the function `hello_world` that prints the greeting string."#.into(),
      input_format: "No input required".into(),
      output_format: "Print: Hello, World!".into(),
      examples: vec![ex("None", "Hello, World!")],
      difficulty: Difficulty::Easy,
      tags: vec!["basics".into(), "strings".into()],
      language: Language::Python,
      chapter: "variables".into(),
      starter_code: "def hello_world():\n    # Write your code here\n    pass\n\n# Do not modify below this line\nhello_world()".into(),
      test_cases: vec![tc("t1", "", "Hello, World!")],
    },
    Problem {
      id: "py-var-2".into(),
      title: "Sum Two Numbers".into(),
      description: r#"# Sum Two Numbers

Write a function that takes two numbers and returns their sum.

## Task
Complete the function `add` that accepts two parameters and returns their sum."#.into(),
      input_format: "Two integers a and b".into(),
      output_format: "An integer representing the sum".into(),
      examples: vec![ex("add(2, 3)", "5")],
      difficulty: Difficulty::Easy,
      tags: vec!["basics".into(), "math".into()],
      language: Language::Python,
      chapter: "variables".into(),
      starter_code: "def add(a, b):\n    # Write your code here\n    pass\n\n# Test cases\nprint(add(2, 3))\nprint(add(-1, 1))".into(),
      test_cases: vec![tc("t1", "2, 3", "5"), tch("t2", "-1, 1", "0")],
    },
    Problem {
      id: "py-loop-1".into(),
      title: "Count to N".into(),
      description: r#"# Count to N

Write a function that prints numbers from 1 to n, each on a new line.

## Task
Complete the function `count_to_n` that prints numbers from 1 to n."#.into(),
      input_format: "A positive integer n".into(),
      output_format: "Numbers from 1 to n, each on a new line".into(),
      examples: vec![ex("count_to_n(5)", "1\n2\n3\n4\n5")],
      difficulty: Difficulty::Easy,
      tags: vec!["loops".into(), "basics".into()],
      language: Language::Python,
      chapter: "loops".into(),
      starter_code: "def count_to_n(n):\n    # Write your code here\n    pass\n\ncount_to_n(5)".into(),
      test_cases: vec![tc("t1", "5", "1\n2\n3\n4\n5"), tch("t2", "3", "1\n2\n3")],
    },
    Problem {
      id: "py-loop-2".into(),
      title: "Sum of List".into(),
      description: r#"# Sum of List

Write a function that calculates the sum of all numbers in a list without using the built-in sum function.

## Task
Complete the function `sum_list` that returns the total."#.into(),
      input_format: "A list of integers".into(),
      output_format: "The sum of all integers".into(),
      examples: vec![ex("sum_list([1, 2, 3, 4, 5])", "15")],
      difficulty: Difficulty::Easy,
      tags: vec!["loops".into(), "lists".into()],
      language: Language::Python,
      chapter: "loops".into(),
      starter_code: "def sum_list(arr):\n    # Write your code here - don't use sum()!\n    pass\n\nprint(sum_list([1, 2, 3, 4, 5]))\nprint(sum_list([-1, 0, 1]))".into(),
      test_cases: vec![tc("t1", "[1, 2, 3, 4, 5]", "15"), tch("t2", "[-1, 0, 1]", "0")],
    },
    Problem {
      id: "py-loop-3".into(),
      title: "FizzBuzz".into(),
      description: r#"# FizzBuzz

Write a function that prints numbers from 1 to n. For multiples of 3, print "Fizz". For multiples of 5, print "Buzz". For multiples of both, print "FizzBuzz".

## Task
Complete the classic FizzBuzz challenge in Python!"#.into(),
      input_format: "A positive integer n".into(),
      output_format: "Numbers or Fizz/Buzz/FizzBuzz from 1 to n".into(),
      examples: vec![ex("fizz_buzz(15)", "1\n2\nFizz\n4\nBuzz\nFizz\n7\n8\nFizz\nBuzz\n11\nFizz\n13\n14\nFizzBuzz")],
      difficulty: Difficulty::Easy,
      tags: vec!["loops".into(), "conditionals".into()],
      language: Language::Python,
      chapter: "loops".into(),
      starter_code: "def fizz_buzz(n):\n    # Write your code here\n    pass\n\nfizz_buzz(15)".into(),
      test_cases: vec![tc("t1", "15", "1\n2\nFizz\n4\nBuzz\nFizz\n7\n8\nFizz\nBuzz\n11\nFizz\n13\n14\nFizzBuzz")],
    },
    Problem {
      id: "py-list-1".into(),
      title: "Find Maximum".into(),
      description: r#"# Find Maximum

Write a function that finds the largest number in a list without using the built-in max function.

## Task
Complete the function `find_max` that returns the maximum value."#.into(),
      input_format: "A list of integers".into(),
      output_format: "The largest integer".into(),
      examples: vec![ex("find_max([1, 5, 3, 9, 2])", "9")],
      difficulty: Difficulty::Easy,
      tags: vec!["lists".into(), "searching".into()],
      language: Language::Python,
      chapter: "lists".into(),
      starter_code: "def find_max(arr):\n    # Write your code here - don't use max()!\n    pass\n\nprint(find_max([1, 5, 3, 9, 2]))\nprint(find_max([-5, -1, -10]))".into(),
      test_cases: vec![tc("t1", "[1, 5, 3, 9, 2]", "9"), tch("t2", "[-5, -1, -10]", "-1")],
    },
    Problem {
      id: "py-func-1".into(),
      title: "Factorial".into(),
      description: r#"# Factorial

Write a function that calculates the factorial of a number.

## Task
Complete the function `factorial` using recursion or loops."#.into(),
      input_format: "A non-negative integer n".into(),
      output_format: "The factorial of n".into(),
      examples: vec![ex("factorial(5)", "120")],
      difficulty: Difficulty::Medium,
      tags: vec!["functions".into(), "recursion".into(), "math".into()],
      language: Language::Python,
      chapter: "functions".into(),
      starter_code: "def factorial(n):\n    # Write your code here\n    pass\n\nprint(factorial(5))\nprint(factorial(0))".into(),
      test_cases: vec![tc("t1", "5", "120"), tch("t2", "0", "1")],
    },
    Problem {
      id: "py-str-1".into(),
      title: "Palindrome Check".into(),
      description: r#"# Palindrome Check

Write a function that checks if a string is a palindrome.

## Task
Complete the function `is_palindrome` that returns True or False. Ignore case and spaces."#.into(),
      input_format: "A string".into(),
      output_format: "Boolean (True or False)".into(),
      examples: vec![ex("is_palindrome(\"racecar\")", "True")],
      difficulty: Difficulty::Easy,
      tags: vec!["strings".into(), "manipulation".into()],
      language: Language::Python,
      chapter: "strings".into(),
      starter_code: "def is_palindrome(s):\n    # Write your code here\n    pass\n\nprint(is_palindrome(\"racecar\"))\nprint(is_palindrome(\"hello\"))".into(),
      test_cases: vec![tc("t1", "\"racecar\"", "True"), tch("t2", "\"hello\"", "False")],
    },
    Problem {
      id: "py-ds-1".into(),
      title: "Two Sum".into(),
      description: r#"# Two Sum

Given a list of integers and a target sum, return the indices of two numbers that add up to the target.

## Task
Complete the function `two_sum` that returns a list of two indices."#.into(),
      input_format: "A list of integers and a target integer".into(),
      output_format: "List of two indices".into(),
      examples: vec![ex("two_sum([2, 7, 11, 15], 9)", "[0, 1]")],
      difficulty: Difficulty::Medium,
      tags: vec!["lists".into(), "dict".into(), "searching".into()],
      language: Language::Python,
      chapter: "data-structures".into(),
      starter_code: "def two_sum(nums, target):\n    # Write your code here\n    pass\n\nprint(two_sum([2, 7, 11, 15], 9))\nprint(two_sum([3, 2, 4], 6))".into(),
      test_cases: vec![tc("t1", "[2, 7, 11, 15], 9", "[0, 1]"), tch("t2", "[3, 2, 4], 6", "[1, 2]")],
    },
  ]
}
