/*!
# Introduction to Streaming Brainfuck

Begin by opening a terminal and running the executable with no arguments.
If you get the following, you have achieved success. Type CTRL-D to exit.
<pre><code>&nbsp;] █
</code></pre>

Stop a running program with CTRL-C.

Brainfuck is a language of eight instructions operating on a tape of
numeric cells and a data pointer. Every other character in a program is a
comment. The instructions are:

<pre><code>&nbsp;  >   move the data pointer one cell to the right
&nbsp;  <   move the data pointer one cell to the left
&nbsp;  +   add one to the cell under the pointer
&nbsp;  -   subtract one from the cell under the pointer
&nbsp;  .   write the cell under the pointer as a character
&nbsp;  ,   read one byte of input into the cell under the pointer
&nbsp;  [   if the cell is zero, jump past the matching ]
&nbsp;  ]   if the cell is not zero, jump back to the matching [
</code></pre>

At the `]` prompt, type a program followed by ENTER and it runs at once.
This prints an exclamation mark, character 33:

<pre><code>&nbsp;] +++[>+++++++++++<-]>.
&nbsp;  !
</code></pre>

The interpreter streams its program. It never reads further into the
source than execution has reached, so a program piped in slowly begins
producing output immediately. When a loop's body must be skipped, the
interpreter scans forward only far enough to find the matching `]`,
remembers where it was, and never scans for that loop again.

To run a program from a file or from the web:

<pre><code>&nbsp;$ brainfuck programs/hello.bf
&nbsp;  Hello World!
&nbsp;$ brainfuck https://example.org/hello.bf
&nbsp;  Hello World!
</code></pre>

Cells are 64-bit signed integers by default and arithmetic wraps at the
cell width. Many classic programs assume one-byte cells; run those with
the `-b` flag. In file mode `,` reads from standard input; at the
interactive prompt there is no input stream and `,` reports an error.

The pointer may not move left of the first cell. Moving right past the
end of the tape grows the tape with fresh zero cells.
*/
